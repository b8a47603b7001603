//! Tests d'intégration : tableur → FeatureCollection

use geojson::Value;
use serde_json::json;
use sheet_table::{Cell, Format, ReadOptions, Table};
use utm2geojson::export::geojson::to_string;
use utm2geojson::{
    create_geojson, ConversionEngine, ConversionError, ConversionRequest, ConversionStatus,
    Hemisphere, LiteProjector,
};

fn point(table: &Table, easting: &str, northing: &str, zone: &str) -> Vec<(f64, f64)> {
    create_geojson(table, easting, northing, zone, Hemisphere::North)
        .unwrap()
        .collection
        .features
        .iter()
        .map(|f| match &f.geometry.as_ref().unwrap().value {
            Value::Point(p) => (p[0], p[1]),
            other => panic!("Expected Point, got {:?}", other),
        })
        .collect()
}

fn sample() -> Table {
    let headers = vec!["ID".to_string(), "E".to_string(), "N".to_string()];
    let rows: Vec<Vec<Cell>> = vec![
        vec!["P1".into(), 500000i64.into(), 4649776i64.into()],
        vec!["P2".into(), 510000.0.into(), "4650000".into()],
        vec!["P3".into(), "abc".into(), 4650000i64.into()],
        vec!["P4".into(), 490000i64.into(), 4640000.5.into()],
        vec!["P5".into(), " 500500 ".into(), 4649000i64.into()],
    ];
    Table::new(headers, rows)
}

#[test]
fn test_invalid_row_is_skipped_in_order() {
    let conversion = create_geojson(&sample(), "E", "N", "31", Hemisphere::North).unwrap();

    let ids: Vec<_> = conversion
        .collection
        .features
        .iter()
        .map(|f| f.properties.as_ref().unwrap()["ID"].clone())
        .collect();
    assert_eq!(ids, vec![json!("P1"), json!("P2"), json!("P4"), json!("P5")]);

    let report = &conversion.report;
    assert_eq!(report.rows_total, 5);
    assert_eq!(report.rows_skipped, 1);
    assert_eq!(report.skipped[0].row, 4);
    assert_eq!(report.status, ConversionStatus::PartialSuccess);
    assert_eq!(report.summary(), "4 of 5 rows converted, 1 rows were skipped");
}

#[test]
fn test_all_rows_invalid() {
    let table = Table::new(
        vec!["E".into(), "N".into()],
        vec![vec!["x".into(), "y".into()], vec![Cell::Empty, 1i64.into()]],
    );

    let err = create_geojson(&table, "E", "N", "31", Hemisphere::North).unwrap_err();
    assert!(matches!(err, ConversionError::AllRowsFailed { rows: 2, .. }));
}

#[test]
fn test_validation_errors() {
    let table = sample();

    assert_eq!(
        create_geojson(&table, "E", "N", "0", Hemisphere::North).unwrap_err(),
        ConversionError::InvalidZone("0".into())
    );
    assert_eq!(
        create_geojson(&table, "E", "N", "3.5", Hemisphere::North).unwrap_err(),
        ConversionError::InvalidZone("3.5".into())
    );
    assert_eq!(
        create_geojson(&table, "", "N", "31", Hemisphere::North).unwrap_err(),
        ConversionError::MissingColumnSelection
    );
    assert_eq!(
        create_geojson(&table, "E", "E", "31", Hemisphere::North).unwrap_err(),
        ConversionError::DuplicateColumnSelection
    );
    // Zone vérifiée en premier
    assert_eq!(
        create_geojson(&table, "", "", "abc", Hemisphere::North).unwrap_err(),
        ConversionError::InvalidZone("abc".into())
    );
}

#[test]
fn test_false_origin_maps_to_central_meridian() {
    let table = Table::new(
        vec!["E".into(), "N".into()],
        vec![vec![500000i64.into(), 0i64.into()]],
    );

    let points = point(&table, "E", "N", "31");
    assert!((points[0].0 - 3.0).abs() < 1e-6, "{:?}", points);
    assert!(points[0].1.abs() < 1e-6, "{:?}", points);
}

#[test]
fn test_properties_keep_raw_values() {
    let table = Table::new(
        vec!["ID".into(), "E".into(), "N".into()],
        vec![vec!["A1".into(), 500000i64.into(), 4649776i64.into()]],
    );

    let conversion = create_geojson(&table, "E", "N", "31", Hemisphere::North).unwrap();
    let feature = &conversion.collection.features[0];

    assert_eq!(
        serde_json::Value::Object(feature.properties.clone().unwrap()),
        json!({"ID": "A1", "E": 500000, "N": 4649776})
    );

    // ~42°N sur le méridien central de la zone 31
    match &feature.geometry.as_ref().unwrap().value {
        Value::Point(p) => {
            assert!((p[0] - 3.0).abs() < 1e-6);
            assert!((p[1] - 42.0).abs() < 0.01, "{:?}", p);
        }
        other => panic!("Expected Point, got {:?}", other),
    }
}

#[test]
fn test_south_hemisphere() {
    let table = Table::new(
        vec!["E".into(), "N".into()],
        vec![vec![500000i64.into(), 10000000i64.into()]],
    );

    let conversion = create_geojson(&table, "E", "N", 31i64, Hemisphere::South).unwrap();
    match &conversion.collection.features[0].geometry.as_ref().unwrap().value {
        Value::Point(p) => {
            assert!((p[0] - 3.0).abs() < 1e-6);
            assert!(p[1].abs() < 1e-6);
        }
        other => panic!("Expected Point, got {:?}", other),
    }
}

#[test]
fn test_ragged_rows() {
    let table = Table::new(
        vec!["E".into(), "N".into(), "Name".into(), "Note".into()],
        vec![
            vec![500000i64.into(), 4649776i64.into()],
            vec![500000i64.into(), 4649776i64.into(), Cell::Empty, "ok".into(), "extra".into()],
        ],
    );

    let conversion = create_geojson(&table, "E", "N", "31", Hemisphere::North).unwrap();
    let first = serde_json::Value::Object(conversion.collection.features[0].properties.clone().unwrap());
    let second = serde_json::Value::Object(conversion.collection.features[1].properties.clone().unwrap());

    assert_eq!(first, json!({"E": 500000, "N": 4649776, "Name": "", "Note": ""}));
    assert_eq!(second, json!({"E": 500000, "N": 4649776, "Name": "", "Note": "ok"}));
}

#[test]
fn test_output_is_deterministic() {
    let table = sample();
    let first = create_geojson(&table, "E", "N", "31", Hemisphere::North).unwrap();
    let second = create_geojson(&table, "E", "N", "31", Hemisphere::North).unwrap();

    assert_eq!(
        to_string(&first.collection, false).unwrap(),
        to_string(&second.collection, false).unwrap()
    );
}

#[test]
fn test_engine_with_lite_projector() {
    let table = sample();
    let request =
        ConversionRequest::validate("31", "E", "N", Hemisphere::North, &table.headers).unwrap();

    let lite = ConversionEngine::new(LiteProjector::new())
        .convert(&table, &request)
        .unwrap();
    let smart = create_geojson(&table, "E", "N", "31", Hemisphere::North).unwrap();

    assert_eq!(lite.collection, smart.collection);
}

#[test]
fn test_csv_end_to_end() {
    let data = "Name;X;Y\nSummit;500000;4649776\n;;\nBad;;4649776\nRiver;501000;4650000\n";
    let table = sheet_table::parse_bytes(
        data.as_bytes(),
        Format::Delimited { delimiter: None },
        &ReadOptions::default(),
    )
    .unwrap();
    assert_eq!(table.row_count(), 3);

    let conversion = create_geojson(&table, "X", "Y", "31", Hemisphere::North).unwrap();
    assert_eq!(conversion.feature_count(), 2);
    // "Bad" est à la ligne 4 du fichier, la ligne vide compte
    assert_eq!(conversion.report.skipped[0].row, 4);

    let properties = conversion.collection.features[1].properties.as_ref().unwrap();
    assert_eq!(properties["Name"], json!("River"));
    assert_eq!(properties["X"], json!(501000));
}

#[test]
fn test_csv_numeric_properties() {
    let table = sheet_table::parse_bytes(
        b"ID,E,N\nA1,500000,4649776\n",
        Format::Delimited { delimiter: None },
        &ReadOptions::default(),
    )
    .unwrap();

    let conversion = create_geojson(&table, "E", "N", "31", Hemisphere::North).unwrap();
    assert_eq!(
        serde_json::Value::Object(conversion.collection.features[0].properties.clone().unwrap()),
        json!({"ID": "A1", "E": 500000, "N": 4649776})
    );
}

#[test]
fn test_coordinates_with_unit_suffix() {
    let table = Table::new(
        vec!["E".into(), "N".into()],
        vec![vec!["500000 m".into(), "0m".into()]],
    );

    let points = point(&table, "E", "N", "31");
    assert!((points[0].0 - 3.0).abs() < 1e-6, "{:?}", points);
    assert!(points[0].1.abs() < 1e-6, "{:?}", points);
}
