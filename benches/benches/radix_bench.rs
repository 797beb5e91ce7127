//! # Radix Encoder Benchmarks
//!
//! Measures binary/hex encoding of positive, negative and widened values.
//!
//! Run: `cargo bench --bench radix_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use tally_radix::{decode, encode_binary, encode_hex, Radix, RadixEncoder};

/// Benchmark the default encoders
fn bench_default_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("default_encoders");

    for value in [0i64, 255, -1, -512, 6_980_368, -2_147_483_648] {
        group.bench_with_input(BenchmarkId::new("binary", value), &value, |b, &v| {
            b.iter(|| black_box(encode_binary(black_box(v))))
        });
        group.bench_with_input(BenchmarkId::new("hex", value), &value, |b, &v| {
            b.iter(|| black_box(encode_hex(black_box(v))))
        });
    }

    group.finish();
}

/// Benchmark wide words and values far beyond 64 bits
fn bench_wide_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_words");

    let huge: BigInt = -(BigInt::from(1u8) << 1000usize) + 12345;
    let encoder = RadixEncoder::binary();

    group.bench_function("extend_1000_bits", |b| {
        b.iter(|| black_box(encoder.encode(black_box(&huge)).unwrap()))
    });

    let wide = RadixEncoder::hexadecimal().with_width(256).unwrap();
    group.bench_function("hex_width_256", |b| {
        b.iter(|| black_box(wide.encode_i64(black_box(-42)).unwrap()))
    });

    group.finish();
}

/// Benchmark decoding a 32-bit word
fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_hex_word", |b| {
        b.iter(|| black_box(decode(black_box("FFFFFFF0"), Radix::Hexadecimal, 8).unwrap()))
    });
}

criterion_group!(benches, bench_default_encoders, bench_wide_words, bench_decode);
criterion_main!(benches);
