// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata k-d tree: a build-once spatial index over caller-owned coordinate columns.
//!
//! Seismic tools repeatedly ask "which survey point is nearest to this trace?" or
//! "which points fall inside this window?". This crate answers both for any number
//! of dimensions.
//!
//! - Coordinates stay with the caller: a [`PointSet`] borrows one slice per dimension.
//! - A [`KdTree`] is built once, by axis-alternating insertion in a [`BuildOrder`]
//!   that keeps sorted survey data from degenerating into a list.
//! - Extents are half-open hyperrectangles ([`Extent`]): `min <= c < max`.
//! - Dimensions can be excluded from the distance metric while still restricting the
//!   search, e.g. a station-number band that must not perturb geometric distance.
//! - Ties are deterministic: among equally distant points the highest index wins, and
//!   the number of other tied points is reported.
//!
//! Three nearest strategies return identical `(index, squared distance, ties)`:
//!
//! - [`KdTree::find_near`]: visits every point inside the extent; fast for narrow extents.
//! - [`cycle_for_near`]: searches growing windows around the target; fast for wide or
//!   unbounded extents when the answer is close by.
//! - [`brute_near`] / [`BruteForce`]: a linear scan, for tiny sets and cross-checks.
//!
//! # Example
//!
//! ```rust
//! use strata_kdtree::{AdaptiveConfig, BuildOrder, Extent, KdTree, PointSet, cycle_for_near};
//!
//! // Three survey points.
//! let x = [0.0, 10.0, 5.0];
//! let y = [0.0, 0.0, 5.0];
//! let tree = KdTree::build(PointSet::new(3, &[&x, &y]), BuildOrder::Dispersed);
//!
//! // (5, 0) is equally far from points 0 and 1; the higher index wins.
//! let extent = Extent::new(&[-100.0, -100.0], &[100.0, 100.0]);
//! let hit = tree.find_near(&extent, &[5.0, 0.0]).unwrap();
//! assert_eq!((hit.index, hit.dist_sq, hit.ties), (1, 25.0, 1));
//!
//! // The adaptive search gives the same answer.
//! let adaptive = cycle_for_near(&tree, &extent, &[5.0, 0.0], AdaptiveConfig::default());
//! assert_eq!(adaptive.nearest, Some(hit));
//!
//! // Range query: x restricted to [0, 4).
//! let mut inside = Vec::new();
//! tree.find_in(&Extent::new(&[0.0, -100.0], &[4.0, 100.0]), &mut inside);
//! assert_eq!(inside, vec![0]);
//! ```
//!
//! ## Excluding a dimension from the metric
//!
//! ```rust
//! use strata_kdtree::{BuildOrder, Extent, KdTree, PointSet};
//!
//! // A profile that loops back: points 0 and 3 are close in space, far in station.
//! let x = [0.0, 50.0, 50.0, 1.0];
//! let y = [0.0, 0.0, 50.0, 0.0];
//! let station = [100.0, 101.0, 102.0, 103.0];
//! let points = PointSet::new(4, &[&x, &y, &station]).with_metric(&[true, true, false]);
//! let tree = KdTree::build(points, BuildOrder::Dispersed);
//!
//! // Point 3 is nearest to (0.8, 0) overall...
//! let everywhere = Extent::unbounded(3);
//! assert_eq!(tree.find_near(&everywhere, &[0.8, 0.0, 0.0]).unwrap().index, 3);
//!
//! // ...but only stations below 102 are candidates here.
//! let band = everywhere.with_bounds(2, 95.0, 102.0);
//! let hit = tree.find_near(&band, &[0.8, 0.0, 0.0]).unwrap();
//! assert_eq!(hit.index, 0);
//! ```
//!
//! ## Logging
//!
//! Builds emit a `tracing` debug event with the tree depth; adaptive searches emit a
//! trace event per cycle. No subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`. Enable `std` (default) or `libm` for
//! square roots.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod adaptive;
pub mod error;
pub mod order;
pub mod points;
pub mod search;
pub mod strategies;
pub mod types;

mod math;


use alloc::vec::Vec;

pub use adaptive::{AdaptiveConfig, AdaptiveNearest, cycle_for_near};
pub use error::Error;
pub use order::{BuildOrder, dispersed_order};
pub use points::PointSet;
pub use search::Search;
pub use strategies::brute::{BruteForce, brute_near};
pub use strategies::kdtree::KdTree;
pub use types::{Extent, Nearest};

/// Build a [`KdTree`] over `points`.
pub fn build(points: PointSet<'_>, order: BuildOrder) -> KdTree<'_> {
    KdTree::build(points, order)
}

/// Every point index inside `extent`.
pub fn find_in(tree: &KdTree<'_>, extent: &Extent) -> Vec<usize> {
    let mut out = Vec::new();
    tree.find_in(extent, &mut out);
    out
}

/// Nearest in-extent point to `target`, searching the whole extent.
pub fn find_near(tree: &KdTree<'_>, extent: &Extent, target: &[f64]) -> Option<Nearest> {
    tree.find_near(extent, target)
}
