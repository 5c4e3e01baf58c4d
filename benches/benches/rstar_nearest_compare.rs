// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use strata_kdtree::{AdaptiveConfig, BuildOrder, Extent, KdTree, PointSet, cycle_for_near};

use rstar::RTree;

fn gen_grid(n: usize, cell: f64) -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(n * n);
    let mut y = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            x.push(i as f64 * cell);
            y.push(j as f64 * cell);
        }
    }
    (x, y)
}

fn bench_rstar_nearest_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_nearest_compare");
    for &n in &[64usize, 128] {
        let (x, y) = gen_grid(n, 10.0);
        let len = x.len();
        let targets: Vec<[f64; 2]> = (0..256)
            .map(|i| [(i * 37 % n) as f64 * 10.0 + 3.3, (i * 91 % n) as f64 * 10.0 + 6.1])
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(format!("strata_build_query_n{n}"), |b| {
            b.iter_batched(
                || PointSet::new(len, &[&x, &y]),
                |points| {
                    let tree = KdTree::build(points, BuildOrder::Dispersed);
                    let everywhere = Extent::unbounded(2);
                    for t in &targets {
                        black_box(cycle_for_near(&tree, &everywhere, t, AdaptiveConfig::default()));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || x.iter().zip(&y).map(|(&x, &y)| [x, y]).collect::<Vec<_>>(),
                |points| {
                    let tree = RTree::bulk_load(points);
                    for t in &targets {
                        black_box(tree.nearest_neighbor(t));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_nearest_compare);
criterion_main!(benches);
