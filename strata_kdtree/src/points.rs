// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-oriented point storage borrowed from the caller.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::types::Extent;

/// `len` points in `dims()` dimensions, stored as one borrowed coordinate slice per
/// dimension, plus a per-dimension flag saying whether that dimension contributes to
/// the distance metric.
///
/// Coordinates are never copied. Any index built over a `PointSet` borrows it, so the
/// caller cannot mutate the columns while the index is alive.
///
/// Dimensions excluded from the metric still take part in [`Extent`] membership: they
/// can bound a search (for example a station-number band) without changing which
/// candidate is closest.
///
/// Every coordinate must be finite. A NaN coordinate would compare false against
/// every split and silently drop out of searches.
#[derive(Clone, Debug)]
pub struct PointSet<'a> {
    columns: Vec<&'a [f64]>,
    metric: Vec<bool>,
    len: usize,
}

impl<'a> PointSet<'a> {
    /// Create a point set of `len` points over `columns`, every dimension metric.
    ///
    /// Columns may be longer than `len`; only the first `len` values are used, and
    /// those must all be finite.
    pub fn try_new(len: usize, columns: &[&'a [f64]]) -> Result<Self, Error> {
        if columns.is_empty() {
            return Err(Error::NoDimensions);
        }
        if len == 0 {
            return Err(Error::NoPoints);
        }
        for (dim, col) in columns.iter().enumerate() {
            if col.len() < len {
                return Err(Error::ShortColumn {
                    dim,
                    len: col.len(),
                    needed: len,
                });
            }
            if let Some(point) = col[..len].iter().position(|c| !c.is_finite()) {
                return Err(Error::NonFiniteCoordinate { dim, point });
            }
        }
        Ok(Self {
            columns: columns.to_vec(),
            metric: vec![true; columns.len()],
            len,
        })
    }

    /// Create a point set of `len` points over `columns`, every dimension metric.
    ///
    /// # Panics
    ///
    /// Panics when [`PointSet::try_new`] would return an error.
    #[track_caller]
    pub fn new(len: usize, columns: &[&'a [f64]]) -> Self {
        match Self::try_new(len, columns) {
            Ok(points) => points,
            Err(e) => panic!("invalid point set: {e}"),
        }
    }

    /// Replace the metric mask; `metric[i] == false` keeps dimension `i` out of distances.
    pub fn try_with_metric(mut self, metric: &[bool]) -> Result<Self, Error> {
        if metric.len() != self.dims() {
            return Err(Error::MetricLength {
                expected: self.dims(),
                found: metric.len(),
            });
        }
        self.metric.copy_from_slice(metric);
        Ok(self)
    }

    /// Replace the metric mask.
    ///
    /// # Panics
    ///
    /// Panics if `metric` does not hold one flag per dimension.
    #[must_use]
    #[track_caller]
    pub fn with_metric(self, metric: &[bool]) -> Self {
        match self.try_with_metric(metric) {
            Ok(points) => points,
            Err(e) => panic!("invalid point set: {e}"),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of dimensions.
    pub fn dims(&self) -> usize {
        self.columns.len()
    }

    /// Per-dimension metric flags.
    pub fn metric(&self) -> &[bool] {
        &self.metric
    }

    /// Coordinate column for one dimension, truncated to [`len`](Self::len).
    pub fn column(&self, dim: usize) -> &'a [f64] {
        &self.columns[dim][..self.len]
    }

    /// Coordinate of `point` in dimension `dim`.
    #[inline]
    pub fn coord(&self, point: usize, dim: usize) -> f64 {
        self.columns[dim][point]
    }

    /// Whether `point` satisfies the extent's half-open bounds in every dimension.
    #[inline]
    pub fn in_extent(&self, point: usize, extent: &Extent) -> bool {
        (0..self.dims()).all(|d| extent.admits(d, self.columns[d][point]))
    }

    /// Squared distance from `point` to `target`, summed over metric dimensions only.
    #[inline]
    pub fn dist_sq(&self, point: usize, target: &[f64]) -> f64 {
        let mut sum = 0.0;
        for (d, col) in self.columns.iter().enumerate() {
            if self.metric[d] {
                let delta = target[d] - col[point];
                sum += delta * delta;
            }
        }
        sum
    }

    /// Smallest extent containing every point.
    ///
    /// Upper bounds are nudged to the next representable value so the largest
    /// coordinate stays inside the half-open extent.
    pub fn bounds(&self) -> Extent {
        let dims = self.dims();
        let mut min = vec![f64::INFINITY; dims];
        let mut max = vec![f64::NEG_INFINITY; dims];
        for (d, (lo, hi)) in min.iter_mut().zip(max.iter_mut()).enumerate() {
            for &c in self.column(d) {
                *lo = lo.min(c);
                *hi = hi.max(c);
            }
            *hi = hi.next_up();
        }
        Extent::new(&min, &max)
    }

    #[track_caller]
    pub(crate) fn check_query(&self, extent: &Extent, target: Option<&[f64]>) {
        assert_eq!(
            extent.dims(),
            self.dims(),
            "extent has {} dimensions, point set has {}",
            extent.dims(),
            self.dims()
        );
        if let Some(t) = target {
            assert_eq!(
                t.len(),
                self.dims(),
                "target has {} coordinates, point set has {} dimensions",
                t.len(),
                self.dims()
            );
        }
    }
}
