// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-scan strategy. Small and simple; good for tiny sets and as an oracle.

use alloc::vec::Vec;

use crate::points::PointSet;
use crate::search::Search;
use crate::types::{Best, Extent, Nearest};

/// Linear scan over every point.
#[derive(Clone, Debug)]
pub struct BruteForce<'a> {
    points: PointSet<'a>,
    bounds: Extent,
}

impl<'a> BruteForce<'a> {
    /// Wrap a point set.
    pub fn new(points: PointSet<'a>) -> Self {
        let bounds = points.bounds();
        Self { points, bounds }
    }
}

impl Search for BruteForce<'_> {
    fn points(&self) -> &PointSet<'_> {
        &self.points
    }

    fn bounds(&self) -> &Extent {
        &self.bounds
    }

    fn find_in(&self, extent: &Extent, out: &mut Vec<usize>) {
        self.points.check_query(extent, None);
        out.clear();
        out.extend((0..self.points.len()).filter(|&i| self.points.in_extent(i, extent)));
    }

    fn find_near(&self, extent: &Extent, target: &[f64]) -> Option<Nearest> {
        brute_near(&self.points, extent, target)
    }
}

/// Nearest in-extent point by scanning all of `points`.
///
/// Same membership, metric, and tie rules as [`KdTree::find_near`](crate::KdTree::find_near).
///
/// # Panics
///
/// Panics if `extent` or `target` do not match the point set's dimensions.
pub fn brute_near(points: &PointSet<'_>, extent: &Extent, target: &[f64]) -> Option<Nearest> {
    points.check_query(extent, Some(target));
    let mut best = Best::default();
    for i in 0..points.len() {
        if points.in_extent(i, extent) {
            best.offer(i, points.dist_sq(i, target));
        }
    }
    best.finish()
}
