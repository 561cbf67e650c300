#![allow(missing_docs)]
//! Benchmarks for the noise kernels through the generator.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use lattice_noise::{NoiseGenerator, NoiseKind};

const SEED: i64 = 12345;

const KINDS: [NoiseKind; 4] = [
    NoiseKind::Value,
    NoiseKind::Perlin,
    NoiseKind::Simplex,
    NoiseKind::Worley,
];

fn bench_single_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_sample");

    for kind in KINDS {
        let generator = NoiseGenerator::with_seed(kind, SEED);
        // Draw the tables before measuring
        generator.noise(&[0.0]).unwrap();

        for dimension in 1..=4 {
            let coord: Vec<f64> = (0..dimension).map(|axis| 0.37 + axis as f64 * 1.9).collect();
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), format!("{dimension}d")),
                &coord,
                |b, coord| {
                    b.iter(|| black_box(generator.noise(black_box(coord))));
                },
            );
        }
    }

    group.finish();
}

fn bench_octaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("octaves");
    let generator = NoiseGenerator::with_seed(NoiseKind::Perlin, SEED);

    for octaves in [1, 4, 8] {
        generator.configure(octaves, 0.5).unwrap();
        group.bench_with_input(BenchmarkId::new("perlin_3d", octaves), &octaves, |b, _| {
            b.iter(|| black_box(generator.noise(black_box(&[12.5, 64.25, -3.75]))));
        });
    }

    group.finish();
}

fn bench_heightmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heightmap");
    group.sample_size(20);

    for kind in KINDS {
        let generator = NoiseGenerator::with_seed(kind, SEED);
        generator.configure(4, 0.5).unwrap();
        // 256x256 heightmap, sampled in parallel
        group.bench_function(BenchmarkId::new(kind.to_string(), "256x256"), |b| {
            b.iter(|| black_box(generator.sample_grid([0.0, 0.0], 0.03, 256, 256)));
        });
    }

    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    let generator = NoiseGenerator::with_seed(NoiseKind::Perlin, SEED);
    let mut seed = SEED;

    c.bench_function("reseed_and_sample", |b| {
        b.iter(|| {
            seed += 1;
            generator.set_seed(seed);
            black_box(generator.noise(&[0.5, 0.5]))
        });
    });
}

criterion_group!(
    benches,
    bench_single_sample,
    bench_octaves,
    bench_heightmap,
    bench_table_build
);
criterion_main!(benches);
