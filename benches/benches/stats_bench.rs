//! # Statistics Benchmarks
//!
//! Run: `cargo bench --bench stats_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tally_core::{parse_values, Summary, WordCounts};

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [100usize, 1_000, 10_000] {
        let data: Vec<f64> = (0..size).map(|i| ((i * 7919) % 1000) as f64 / 10.0).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(Summary::compute(black_box(data)).unwrap()))
        });
    }

    group.finish();
}

fn bench_parse_and_count(c: &mut Criterion) {
    let numbers: String = (0..5_000).map(|i| format!("{}\n", i - 2_500)).collect();
    c.bench_function("parse_5000_lines", |b| {
        b.iter(|| black_box(parse_values::<f64>(black_box(&numbers))))
    });

    let text = "the quick brown fox jumps over the lazy dog ".repeat(1_000);
    c.bench_function("word_counts_9000_words", |b| {
        b.iter(|| black_box(WordCounts::from_text(black_box(&text))))
    });
}

criterion_group!(benches, bench_summary, bench_parse_and_count);
criterion_main!(benches);
