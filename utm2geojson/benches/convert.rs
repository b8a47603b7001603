//! Benchmarks pour la conversion UTM → GeoJSON

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheet_table::{Cell, Table};
use utm2geojson::{ConversionEngine, ConversionRequest, EngineOptions, Hemisphere, SmartProjector};

/// Table synthétique : une grille de points autour du méridien central de la zone 31
fn synthetic_table(rows: usize) -> Table {
    let headers = vec!["ID".to_string(), "E".to_string(), "N".to_string(), "Name".to_string()];
    let rows = (0..rows)
        .map(|i| {
            let easting = 400_000.0 + (i % 1000) as f64 * 200.0;
            let northing = 4_500_000.0 + (i / 1000) as f64 * 200.0;
            vec![
                Cell::Integer(i as i64),
                Cell::Number(easting),
                Cell::Text(format!("{:.2}", northing)),
                Cell::Text(format!("point {}", i)),
            ]
        })
        .collect();
    Table::new(headers, rows)
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [1_000usize, 10_000, 100_000] {
        let table = synthetic_table(size);
        let request =
            ConversionRequest::validate("31", "E", "N", Hemisphere::North, &table.headers).unwrap();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &table, |b, table| {
            let engine = ConversionEngine::new(SmartProjector::new());
            b.iter(|| black_box(engine.convert(black_box(table), &request).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &table, |b, table| {
            let engine = ConversionEngine::with_options(
                SmartProjector::new(),
                EngineOptions { parallel: true },
            );
            b.iter(|| black_box(engine.convert(black_box(table), &request).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
