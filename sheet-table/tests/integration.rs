//! Tests d'intégration sur des fichiers réels écrits dans le répertoire temporaire

use std::path::PathBuf;

use sheet_table::{read_table, read_table_with, Cell, ReadOptions, TableError};

fn write_fixture(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sheet_table_{}_{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_read_csv_file() {
    let path = write_fixture(
        "points.csv",
        b"ID,Easting,Northing,Label\nP1,500000,4649776,Origine\nP2,501000,4650000\n",
    );

    let table = read_table(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(table.headers, vec!["ID", "Easting", "Northing", "Label"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 3), Some(&Cell::Text("Origine".into())));
    // Ligne courte : la cellule manquante est absente
    assert_eq!(table.cell(1, 3), None);
}

#[test]
fn test_read_tsv_file() {
    let path = write_fixture("points.tsv", b"E\tN\n1\t2\n");

    let table = read_table(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(table.headers, vec!["E", "N"]);
}

#[test]
fn test_read_latin1_semicolon_csv() {
    let path = write_fixture("latin1.csv", b"Rep\xe8re;X;Y\nB1;350000;5000000\n");

    let table = read_table(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(table.headers, vec!["Repère", "X", "Y"]);
    assert_eq!(table.cell(0, 1), Some(&Cell::Integer(350000)));
}

#[test]
fn test_read_header_only_file() {
    let path = write_fixture("header_only.csv", b"E,N\n\n");

    let result = read_table(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(TableError::EmptyTable)));
}

#[test]
fn test_read_single_column_file() {
    let path = write_fixture("single.csv", b"E\n1\n2\n");

    let result = read_table(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(TableError::TooFewColumns)));
}

#[test]
fn test_read_corrupt_workbook() {
    let path = write_fixture("corrupt.xlsx", b"not a workbook");

    let result = read_table_with(&path, &ReadOptions::default());
    std::fs::remove_file(&path).ok();

    let err = result.unwrap_err();
    assert!(matches!(err, TableError::Workbook(_)));
    assert!(err.to_string().contains("valid format"));
}

#[test]
fn test_unsupported_extension() {
    let result = read_table(std::path::Path::new("points.shp"));
    assert!(matches!(result, Err(TableError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_file() {
    let result = read_table(std::path::Path::new("/nonexistent/points.csv"));
    assert!(matches!(result, Err(TableError::Io(_))));
}
