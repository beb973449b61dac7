//! Benchmarks for `lexi64` encode and decode.
//!
//! Inputs mix signs and are spread over bit widths 0–63 so every class on
//! both sides of zero is exercised.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn mixed_width_values(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        // Arithmetic shift keeps the sign while shrinking the magnitude.
        .map(|_| rng.random::<i64>() >> rng.random_range(0..64u32))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let values = mixed_width_values(1024, 11);

    let mut group = c.benchmark_group("lexi64");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| {
            for &value in &values {
                black_box(lexi64::encode_array(black_box(value)));
            }
        });
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let encoded: Vec<([u8; lexi64::MAX_BYTES], usize)> = mixed_width_values(1024, 11)
        .into_iter()
        .map(lexi64::encode_array)
        .collect();

    let mut group = c.benchmark_group("lexi64");
    group.throughput(Throughput::Elements(encoded.len() as u64));
    group.bench_function("decode", |b| {
        b.iter(|| {
            for (bytes, len) in &encoded {
                black_box(lexi64::decode(black_box(&bytes[..*len])).expect("decode failed"));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
