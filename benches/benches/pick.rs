// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_pick::{PickConfig, Picker};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// One draw pass worth of shapes: a `side` x `side` grid of cells, each
/// holding a rect, a circle handle, a line, and a connector curve.
fn populate(picker: &mut Picker<u32>, side: usize) {
    picker.reset();
    for y in 0..side {
        for x in 0..side {
            let id = (y * side + x) as u32 * 4;
            let x0 = x as f64 * 40.0;
            let y0 = y as f64 * 40.0;
            picker.add_rect(id, 2.0, x0, y0, 30.0, 20.0);
            picker.add_circle(id + 1, 3.0, x0 + 30.0, y0 + 10.0, 4.0);
            picker.add_line(id + 2, 4.0, x0, y0 + 25.0, x0 + 30.0, y0 + 25.0, 2.0);
            picker.add_curve_to(
                id + 3,
                4.0,
                x0 + 30.0,
                y0 + 10.0,
                x0 + 40.0,
                y0 + 10.0,
                x0 + 30.0,
                y0 + 40.0,
                x0 + 40.0,
                y0 + 40.0,
                4.0,
            );
        }
    }
}

fn random_points(count: usize, extent: f64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    (0..count)
        .map(|_| (rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/populate");
    for side in [8usize, 32, 64] {
        group.throughput(Throughput::Elements((side * side * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            b.iter_batched(
                || Picker::<u32>::with_capacity(side * side * 4),
                |mut picker| {
                    populate(&mut picker, side);
                    black_box(picker.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/find");
    let points = random_points(256, 40.0 * 32.0);
    for side in [8usize, 32] {
        let mut picker = Picker::new();
        populate(&mut picker, side);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(BenchmarkId::new("all_hits", side), &picker, |b, picker| {
            b.iter(|| {
                let mut hits = 0;
                for &(x, y) in &points {
                    hits += picker.find(x, y).count();
                }
                black_box(hits)
            });
        });
        group.bench_with_input(BenchmarkId::new("closest", side), &picker, |b, picker| {
            b.iter(|| {
                for &(x, y) in &points {
                    black_box(picker.closest(x, y));
                }
            });
        });
    }
    group.finish();
}

fn bench_curve_accuracy(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/curve_accuracy");
    let points = random_points(256, 40.0 * 8.0);
    // Hypothesis: cost grows roughly with log(1 / accuracy) thanks to pruning.
    for accuracy in [1.0, 0.25, 0.05] {
        let mut picker = Picker::with_config(PickConfig {
            curve_accuracy: accuracy,
            ..PickConfig::default()
        });
        populate(&mut picker, 8);
        group.bench_with_input(
            BenchmarkId::from_parameter(accuracy),
            &picker,
            |b, picker| {
                b.iter(|| {
                    let mut hits = 0;
                    for &(x, y) in &points {
                        hits += picker.find(x, y).count();
                    }
                    black_box(hits)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_populate, bench_find, bench_curve_accuracy);
criterion_main!(benches);
