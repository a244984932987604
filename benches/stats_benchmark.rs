#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for aggregation and transformation over growing sequences.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use intstream_lab::prelude::*;

fn sample(size: usize) -> Vec<i32> {
    // Deterministic mix of signs, duplicates and parities
    (0..size)
        .map(|i| i32::try_from((i * 7919) % 2001).expect("bounded by 2001") - 1000)
        .collect()
}

fn stats_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for size in [100, 1_000, 10_000, 100_000] {
        let data = sample(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| stats(black_box(&data)));
        });
    }

    group.finish();
}

fn transform_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct_sorted");

    for size in [100, 1_000, 10_000, 100_000] {
        let data = sample(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| demonstrate_distinct_and_sorted(black_box(&data)));
        });
    }

    group.finish();
}

fn report_benchmark(c: &mut Criterion) {
    let seq = InputSequence::new(sample(10_000));
    let config = LabConfig::default();

    c.bench_function("report_10k", |b| {
        b.iter(|| Report::compute(black_box(&seq), &config));
    });
}

criterion_group!(benches, stats_benchmark, transform_benchmark, report_benchmark);
criterion_main!(benches);
