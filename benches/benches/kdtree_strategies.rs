// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use strata_kdtree::{
    AdaptiveConfig, BruteForce, BuildOrder, Extent, KdTree, PointSet, Search, cycle_for_near,
};

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

/// A CMP-style survey: `lines` receiver lines of `per_line` points, sorted by line
/// then by position, the way survey files arrive.
fn gen_survey(lines: usize, per_line: usize, spacing: f64) -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(lines * per_line);
    let mut y = Vec::with_capacity(lines * per_line);
    let mut rng = Rng::new(0x5EED_CAFE_F00D_0001);
    for l in 0..lines {
        for p in 0..per_line {
            x.push(p as f64 * spacing + (rng.next_f64() - 0.5) * spacing * 0.2);
            y.push(l as f64 * spacing * 4.0 + (rng.next_f64() - 0.5) * spacing * 0.2);
        }
    }
    (x, y)
}

fn gen_targets(count: usize, max_x: f64, max_y: f64) -> Vec<[f64; 2]> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| [rng.next_f64() * max_x, rng.next_f64() * max_y])
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &lines in &[16usize, 64] {
        let (x, y) = gen_survey(lines, 256, 25.0);
        let n = x.len();
        group.throughput(Throughput::Elements(n as u64));
        for order in [BuildOrder::Natural, BuildOrder::Dispersed] {
            group.bench_function(format!("{order:?}_n{n}"), |b| {
                b.iter_batched(
                    || PointSet::new(n, &[&x, &y]),
                    |points| {
                        let tree = KdTree::build(points, order);
                        black_box(tree.depth());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let (x, y) = gen_survey(64, 256, 25.0);
    let n = x.len();
    let tree = KdTree::build(PointSet::new(n, &[&x, &y]), BuildOrder::Dispersed);
    let brute = BruteForce::new(PointSet::new(n, &[&x, &y]));
    let targets = gen_targets(256, 256.0 * 25.0, 64.0 * 100.0);
    let everywhere = Extent::unbounded(2);
    let narrow = |t: &[f64; 2]| {
        Extent::new(&[t[0] - 60.0, t[1] - 60.0], &[t[0] + 60.0, t[1] + 60.0])
    };
    group.throughput(Throughput::Elements(targets.len() as u64));

    group.bench_function("exact_unbounded", |b| {
        b.iter(|| {
            for t in &targets {
                black_box(tree.find_near(&everywhere, t));
            }
        });
    });
    group.bench_function("exact_narrow", |b| {
        b.iter(|| {
            for t in &targets {
                black_box(tree.find_near(&narrow(t), t));
            }
        });
    });
    group.bench_function("adaptive_unbounded", |b| {
        b.iter(|| {
            for t in &targets {
                black_box(cycle_for_near(&tree, &everywhere, t, AdaptiveConfig::default()));
            }
        });
    });
    group.bench_function("brute_unbounded", |b| {
        b.iter(|| {
            for t in &targets {
                black_box(brute.find_near(&everywhere, t));
            }
        });
    });
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    let (x, y) = gen_survey(64, 256, 25.0);
    let n = x.len();
    let tree = KdTree::build(PointSet::new(n, &[&x, &y]), BuildOrder::Dispersed);
    let window = Extent::new(&[1000.0, 1000.0], &[2000.0, 2000.0]);
    group.bench_function("find_in_window", |b| {
        let mut out = Vec::new();
        b.iter(|| {
            tree.find_in(&window, &mut out);
            black_box(out.len());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_nearest, bench_range);
criterion_main!(benches);
