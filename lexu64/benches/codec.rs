//! Benchmarks for `lexu64` encode and decode.
//!
//! Inputs are spread uniformly over bit widths 0–63 so every length class
//! is exercised; a single-width workload would make the length computation
//! perfectly predictable.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn mixed_width_values(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.random::<u64>() >> rng.random_range(0..64u32))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let values = mixed_width_values(1024, 7);

    let mut group = c.benchmark_group("lexu64");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| {
            for &value in &values {
                black_box(lexu64::encode_array(black_box(value)));
            }
        });
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let encoded: Vec<([u8; lexu64::MAX_BYTES], usize)> = mixed_width_values(1024, 7)
        .into_iter()
        .map(lexu64::encode_array)
        .collect();

    let mut group = c.benchmark_group("lexu64");
    group.throughput(Throughput::Elements(encoded.len() as u64));
    group.bench_function("decode", |b| {
        b.iter(|| {
            for (bytes, len) in &encoded {
                black_box(lexu64::decode(black_box(&bytes[..*len])).expect("decode failed"));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
