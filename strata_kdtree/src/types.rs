// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extents, query results, and the shared tie-break rule.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::Error;
use crate::math::sqrt;

/// Axis-aligned hyperrectangle with inclusive minimum and exclusive maximum bounds.
///
/// A coordinate vector `c` is inside when `min[i] <= c[i] < max[i]` holds in every
/// dimension. Infinite bounds are allowed; `min == max` describes an empty slab.
#[derive(Clone, Debug, PartialEq)]
pub struct Extent {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl Extent {
    /// Create an extent from per-dimension bounds, checking lengths and ordering.
    pub fn try_new(min: &[f64], max: &[f64]) -> Result<Self, Error> {
        if min.len() != max.len() {
            return Err(Error::ExtentLength {
                min: min.len(),
                max: max.len(),
            });
        }
        if min.is_empty() {
            return Err(Error::NoDimensions);
        }
        for (dim, (lo, hi)) in min.iter().zip(max).enumerate() {
            if !matches!(lo.partial_cmp(hi), Some(Ordering::Less | Ordering::Equal)) {
                return Err(Error::InvertedExtent { dim });
            }
        }
        Ok(Self {
            min: min.to_vec(),
            max: max.to_vec(),
        })
    }

    /// Create an extent from per-dimension bounds.
    ///
    /// # Panics
    ///
    /// Panics if the arrays differ in length, are empty, or `min[i] > max[i]`.
    #[track_caller]
    pub fn new(min: &[f64], max: &[f64]) -> Self {
        match Self::try_new(min, max) {
            Ok(extent) => extent,
            Err(e) => panic!("invalid extent: {e}"),
        }
    }

    /// An extent that admits every finite coordinate in `dims` dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `dims` is zero.
    pub fn unbounded(dims: usize) -> Self {
        assert!(dims > 0, "an extent needs at least one dimension");
        Self {
            min: vec![f64::NEG_INFINITY; dims],
            max: vec![f64::INFINITY; dims],
        }
    }

    /// Replace the bounds of one dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is out of range or `min > max`.
    #[must_use]
    #[track_caller]
    pub fn with_bounds(mut self, dim: usize, min: f64, max: f64) -> Self {
        assert!(dim < self.dims(), "dimension {dim} out of range");
        assert!(min <= max, "extent minimum exceeds maximum in dimension {dim}");
        self.set(dim, min, max);
        self
    }

    /// Number of dimensions.
    pub fn dims(&self) -> usize {
        self.min.len()
    }

    /// Inclusive lower bounds.
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// Exclusive upper bounds.
    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Whether a coordinate vector lies inside.
    pub fn contains(&self, coords: &[f64]) -> bool {
        debug_assert_eq!(coords.len(), self.dims(), "coordinate count mismatch");
        coords
            .iter()
            .zip(self.min.iter().zip(&self.max))
            .all(|(c, (lo, hi))| lo <= c && c < hi)
    }

    #[inline]
    pub(crate) fn set(&mut self, dim: usize, min: f64, max: f64) {
        self.min[dim] = min;
        self.max[dim] = max;
    }

    #[inline]
    pub(crate) fn admits(&self, dim: usize, c: f64) -> bool {
        self.min[dim] <= c && c < self.max[dim]
    }
}

/// Result of a nearest-point query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest {
    /// Index of the winning point; the highest index among equally distant points.
    pub index: usize,
    /// Squared distance over the metric dimensions.
    pub dist_sq: f64,
    /// How many other in-extent points share exactly the same squared distance.
    pub ties: u64,
}

impl Nearest {
    /// Euclidean distance over the metric dimensions.
    pub fn distance(&self) -> f64 {
        sqrt(self.dist_sq)
    }
}

/// Running minimum used by every strategy, so all of them break ties the same way.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Best(Option<Nearest>);

impl Best {
    #[inline]
    pub(crate) fn offer(&mut self, index: usize, dist_sq: f64) {
        match self.0.as_mut() {
            None => {
                self.0 = Some(Nearest {
                    index,
                    dist_sq,
                    ties: 0,
                });
            }
            Some(best) => {
                if dist_sq <= best.dist_sq {
                    if dist_sq < best.dist_sq {
                        *best = Nearest {
                            index,
                            dist_sq,
                            ties: 0,
                        };
                    } else {
                        best.ties += 1;
                        if index > best.index {
                            best.index = index;
                        }
                    }
                }
            }
        }
    }

    pub(crate) fn finish(self) -> Option<Nearest> {
        self.0
    }
}
