//! Benchmarks for rockfall-core hot paths

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rockfall_core::config::IntakeConfig;
use rockfall_core::fixtures::{ALERTS, AlertSummary};
use rockfall_core::heatmap::HeatMap;
use rockfall_core::utils::*;

/// Benchmark heat map generation at a few grid sizes
fn bench_heatmap_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap");

    for &(rows, columns) in &[(8usize, 12usize), (32, 32), (64, 64)] {
        group.throughput(Throughput::Elements((rows * columns) as u64));
        group.bench_with_input(
            BenchmarkId::new("seeded", format!("{rows}x{columns}")),
            &(rows, columns),
            |b, &(rows, columns)| b.iter(|| HeatMap::seeded(42, rows, columns)),
        );
    }

    let map = HeatMap::seeded(42, 64, 64);
    group.bench_function("distribution_64x64", |b| b.iter(|| map.distribution()));

    group.finish();
}

/// Benchmark accept-filter checks against the default lists
fn bench_file_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_validation");

    let IntakeConfig {
        imagery_accept: imagery,
        sensor_accept: sensor,
        ..
    } = IntakeConfig::default();

    let test_files = vec![
        "north_wall.jpg",
        "pit_overview.JPEG",
        "bench_12.png",
        "orthomosaic.tiff",
        "readings.csv",
        "export.xlsx",
        "notes.txt",
        "file_without_extension",
        "survey/2024/zone_a/flight_03.png",
        "../../../etc/passwd",
    ];

    group.throughput(Throughput::Elements(test_files.len() as u64 * 2));
    group.bench_function("validate_extensions", |b| {
        b.iter(|| {
            let mut accepted = 0;
            for filename in &test_files {
                if validate_file_extension(filename, &imagery) {
                    accepted += 1;
                }
                if validate_file_extension(filename, &sensor) {
                    accepted += 1;
                }
            }
            accepted
        })
    });

    let dirty_filenames = vec![
        "north wall (3).png",
        "file@#$%^&*().csv",
        "file/path\\name.jpg",
        "unicode_café_文件.tiff",
    ];

    group.bench_function("sanitize_filenames", |b| {
        b.iter(|| {
            dirty_filenames
                .iter()
                .map(|name| sanitize_filename(name))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark the display helpers used on every intake snapshot
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let sizes = vec![0u64, 512, 1536, 2048, 1_572_864, 1_073_741_824, u64::MAX];

    group.bench_function("format_file_sizes", |b| {
        b.iter(|| {
            sizes
                .iter()
                .map(|&size| format_file_size(size))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("alert_summary", |b| {
        b.iter(|| AlertSummary::from_alerts(&ALERTS))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_heatmap_generation,
    bench_file_validation,
    bench_formatting
);

criterion_main!(benches);
