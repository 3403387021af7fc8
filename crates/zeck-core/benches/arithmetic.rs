//! Criterion benchmarks for Zeckendorf encoding and addition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;

use zeck_core::codec::{decode_magnitude, encode, encode_with};
use zeck_core::{FibonacciSequence, ZeckendorfValue};

fn operand(decimal_digits: usize, lead: char) -> String {
    let mut s = String::with_capacity(decimal_digits);
    s.push(lead);
    s.extend(std::iter::repeat('7').take(decimal_digits - 1));
    s
}

fn bench_codec(c: &mut Criterion) {
    let sizes = [10usize, 100, 1_000];

    let mut group = c.benchmark_group("Encode");
    for &size in &sizes {
        let magnitude: BigUint = operand(size, '9').parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &magnitude, |b, m| {
            b.iter(|| encode(black_box(m)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("EncodeUnmemoized");
    let plain = FibonacciSequence::unmemoized();
    for &size in &sizes[..2] {
        let magnitude: BigUint = operand(size, '9').parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &magnitude, |b, m| {
            b.iter(|| encode_with(&plain, black_box(m)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Decode");
    for &size in &sizes {
        let digits = encode(&operand(size, '9').parse().unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(size), &digits, |b, d| {
            b.iter(|| decode_magnitude(black_box(d)));
        });
    }
    group.finish();
}

fn bench_addition(c: &mut Criterion) {
    let sizes = [10usize, 100, 1_000];

    let mut group = c.benchmark_group("AddLikeSigns");
    for &size in &sizes {
        let a: ZeckendorfValue = operand(size, '8').parse().unwrap();
        let b: ZeckendorfValue = operand(size, '5').parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a) + black_box(b));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("AddUnlikeSigns");
    for &size in &sizes {
        let a: ZeckendorfValue = operand(size, '8').parse().unwrap();
        let b: ZeckendorfValue = format!("-{}", operand(size, '5')).parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a) + black_box(b));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codec, bench_addition);
criterion_main!(benches);
