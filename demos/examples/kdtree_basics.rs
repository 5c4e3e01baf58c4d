// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! K-d tree basics.
//!
//! Build a tree over a few points, run a range query, and compare the three
//! nearest strategies.
//!
//! Run:
//! - `cargo run -p strata_demos --example kdtree_basics`

use strata_kdtree::{
    AdaptiveConfig, BuildOrder, Extent, KdTree, PointSet, brute_near, cycle_for_near,
};

fn main() {
    let x = [0.0, 10.0, 5.0, 7.5, 2.5];
    let y = [0.0, 0.0, 5.0, 2.5, 2.5];
    let points = PointSet::new(x.len(), &[&x, &y]);
    let tree = KdTree::build(points.clone(), BuildOrder::Dispersed);
    println!("built {} points, depth {}", tree.len(), tree.depth());

    // Half-open window: the point at x = 5 is on the exclusive edge.
    let window = Extent::new(&[0.0, 0.0], &[5.0, 5.0]);
    let mut inside = Vec::new();
    tree.find_in(&window, &mut inside);
    inside.sort_unstable();
    println!("inside {window:?}: {inside:?}");
    assert_eq!(inside, vec![0, 4]);

    // Points 3 and 4 are equally close to (5, 0); the higher index wins.
    let everywhere = Extent::unbounded(2);
    let target = [5.0, 0.0];
    let exact = tree.find_near(&everywhere, &target);
    let adaptive = cycle_for_near(&tree, &everywhere, &target, AdaptiveConfig::default());
    let brute = brute_near(&points, &everywhere, &target);
    println!("exact:    {exact:?}");
    println!("adaptive: {:?} in {} cycles", adaptive.nearest, adaptive.cycles);
    println!("brute:    {brute:?}");
    assert_eq!(exact, brute);
    assert_eq!(adaptive.nearest, brute);
    assert_eq!(brute.map(|n| (n.index, n.ties)), Some((4, 1)));
}
