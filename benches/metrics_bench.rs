//! Benchmarks for the Kenpop metrics engine
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kenpop::dataset::{PopulationRecord, PopulationTable};
use kenpop::metrics::*;

/// 47 counties over `years` consecutive years starting in 2010
fn create_test_table(years: i32) -> PopulationTable {
    (0..years)
        .flat_map(|y| {
            (0..47u64).map(move |c| {
                let population = 200_000 + c * 75_000 + (y as u64 * (c % 7)) * 12_500;
                PopulationRecord::new(
                    format!("County {}", c),
                    (c + 1).to_string(),
                    2010 + y,
                    population,
                )
            })
        })
        .collect()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for years in [5, 20, 50] {
        let table = create_test_table(years);
        let newest = 2010 + years - 1;

        group.throughput(Throughput::Elements(table.len() as u64));

        group.bench_function(format!("select_year_{}", years), |b| {
            b.iter(|| select_year(black_box(&table), black_box(newest)))
        });

        group.bench_function(format!("select_and_rank_{}", years), |b| {
            b.iter(|| sort_by_population_descending(select_year(black_box(&table), newest)))
        });
    }

    group.finish();
}

fn bench_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta");

    for years in [5, 20, 50] {
        let table = create_test_table(years);
        let newest = 2010 + years - 1;

        group.throughput(Throughput::Elements(table.len() as u64));

        group.bench_function(format!("year_over_year_{}", years), |b| {
            b.iter(|| compute_year_over_year_delta(black_box(&table), black_box(newest)))
        });
    }

    group.finish();
}

fn bench_migration(c: &mut Criterion) {
    let table = create_test_table(20);
    let deltas = compute_year_over_year_delta(&table, 2029);

    c.bench_function("classify_migration", |b| {
        b.iter(|| classify_migration(black_box(&deltas), DEFAULT_MIGRATION_THRESHOLD))
    });
}

fn bench_format(c: &mut Criterion) {
    let values: Vec<i64> = (0..1000).map(|i| (i - 500) * 9_731).collect();

    c.bench_function("format_compact_number_1000", |b| {
        b.iter(|| {
            for v in &values {
                black_box(format_compact_number(black_box(*v)));
            }
        })
    });
}

criterion_group!(benches, bench_selection, bench_delta, bench_migration, bench_format);
criterion_main!(benches);
