// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search strategy abstraction.

use alloc::vec::Vec;

use crate::points::PointSet;
use crate::types::{Extent, Nearest};

/// A read-only search structure over a [`PointSet`].
///
/// [`KdTree`](crate::KdTree) and [`BruteForce`](crate::BruteForce) implement it and
/// must agree exactly; [`cycle_for_near`](crate::cycle_for_near) drives either one.
pub trait Search {
    /// The indexed points.
    fn points(&self) -> &PointSet<'_>;

    /// The tight half-open bounds of all points (see [`PointSet::bounds`]).
    fn bounds(&self) -> &Extent;

    /// Clear `out` and fill it with every point index inside `extent`, in no
    /// particular order.
    fn find_in(&self, extent: &Extent, out: &mut Vec<usize>);

    /// The point inside `extent` closest to `target` over the metric dimensions.
    ///
    /// Equally distant points resolve to the highest index. Returns `None` when no
    /// point lies inside `extent`.
    fn find_near(&self, extent: &Extent, target: &[f64]) -> Option<Nearest>;
}
