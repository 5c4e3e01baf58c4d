// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for `kurbo` geometry.
//!
//! ## Feature
//!
//! Enable with `kurbo`.
//!
//! ## Notes
//!
//! Strata indexes borrow one coordinate column per dimension, while `kurbo` stores
//! points as rows. [`PlanarColumns`] does the transposition once; rectangles and
//! points convert directly into extents and targets.

use alloc::vec::Vec;

use ::kurbo::{Point, Rect};
use strata_kdtree::{Error, Extent, PointSet};

/// Owned `x` and `y` columns split from a slice of points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanarColumns {
    /// Horizontal coordinates.
    pub x: Vec<f64>,
    /// Vertical coordinates.
    pub y: Vec<f64>,
}

impl PlanarColumns {
    /// Split `points` into columns.
    pub fn from_points(points: &[Point]) -> Self {
        let (x, y) = points.iter().map(|p| (p.x, p.y)).unzip();
        Self { x, y }
    }

    /// Borrow the columns as a two-dimensional point set.
    ///
    /// Fails with [`Error::NoPoints`] when there are no points.
    pub fn point_set(&self) -> Result<PointSet<'_>, Error> {
        PointSet::try_new(self.x.len(), &[&self.x, &self.y])
    }
}

/// The half-open extent covering `rect`: `x0 <= x < x1`, `y0 <= y < y1`.
///
/// The rectangle is normalized first, so either corner order works.
///
/// # Panics
///
/// Panics if a coordinate of `rect` is NaN.
pub fn extent_from_rect(rect: Rect) -> Extent {
    let r = rect.abs();
    Extent::new(&[r.x0, r.y0], &[r.x1, r.y1])
}

/// Query target for a point.
pub fn target(p: Point) -> [f64; 2] {
    [p.x, p.y]
}
