#![allow(missing_docs)]
//! Benchmarks for the table generators and permutation hashing.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use lattice_noise::{
    NoiseKind, NoiseTables, RandomKind,
    random::{LegacyRandom, Random, Xoroshiro},
};

fn bench_next_f64(c: &mut Criterion) {
    let mut legacy = LegacyRandom::from_seed(42);
    c.bench_function("legacy_next_f64", |b| b.iter(|| black_box(legacy.next_f64())));

    let mut xoroshiro = Xoroshiro::from_seed(42);
    c.bench_function("xoroshiro_next_f64", |b| {
        b.iter(|| black_box(xoroshiro.next_f64()));
    });
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");

    for size in [256, 4096] {
        for random in [RandomKind::Legacy, RandomKind::Xoroshiro] {
            group.bench_with_input(
                BenchmarkId::new(format!("perlin_{random:?}"), size),
                &size,
                |b, &size| {
                    b.iter(|| black_box(NoiseTables::build(NoiseKind::Perlin, 7, random, size)));
                },
            );
        }
    }

    group.finish();
}

fn bench_hash_chain(c: &mut Criterion) {
    let tables = NoiseTables::build(NoiseKind::Value, 7, RandomKind::Legacy, 256).unwrap();
    let permutation = tables.permutation();

    c.bench_function("hash4", |b| {
        b.iter(|| black_box(permutation.hash4(black_box(3), black_box(-9), 120, 7)));
    });
    c.bench_function("hash_chain_6d", |b| {
        b.iter(|| black_box(permutation.hash(black_box([3, -9, 120, 7, 0, 44]))));
    });
}

criterion_group!(benches, bench_next_f64, bench_table_build, bench_hash_chain);
criterion_main!(benches);
