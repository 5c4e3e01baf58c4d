// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors for point sets, extents, and search configurations.

use core::fmt;

/// A violated precondition detected while assembling a [`PointSet`](crate::PointSet)
/// or an [`Extent`](crate::Extent), or while checking an
/// [`AdaptiveConfig`](crate::AdaptiveConfig).
///
/// Queries never fail: "nothing in range" is reported as `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// No coordinate columns were supplied.
    NoDimensions,
    /// The point count is zero.
    NoPoints,
    /// A coordinate column holds fewer values than the point count.
    ShortColumn {
        /// Offending dimension.
        dim: usize,
        /// Length of that column.
        len: usize,
        /// Point count the column must cover.
        needed: usize,
    },
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// Dimension of the coordinate.
        dim: usize,
        /// Index of the point.
        point: usize,
    },
    /// The metric mask does not have one flag per dimension.
    MetricLength {
        /// Number of dimensions.
        expected: usize,
        /// Number of flags supplied.
        found: usize,
    },
    /// Extent minimum and maximum arrays differ in length.
    ExtentLength {
        /// Length of the minimum array.
        min: usize,
        /// Length of the maximum array.
        max: usize,
    },
    /// `min > max` (or a NaN bound) in one dimension.
    InvertedExtent {
        /// Offending dimension.
        dim: usize,
    },
    /// A search radius is not positive and finite.
    InvalidRadius,
    /// A radius growth factor is not finite and above 1.
    InvalidGrowth,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NoDimensions => f.write_str("point set needs at least one dimension"),
            Self::NoPoints => f.write_str("point set needs at least one point"),
            Self::ShortColumn { dim, len, needed } => write!(
                f,
                "coordinate column {dim} holds {len} values but {needed} points were declared"
            ),
            Self::NonFiniteCoordinate { dim, point } => write!(
                f,
                "coordinate {dim} of point {point} is not finite"
            ),
            Self::MetricLength { expected, found } => write!(
                f,
                "metric mask has {found} flags for {expected} dimensions"
            ),
            Self::ExtentLength { min, max } => write!(
                f,
                "extent has {min} minimum bounds but {max} maximum bounds"
            ),
            Self::InvertedExtent { dim } => {
                write!(f, "extent minimum exceeds maximum in dimension {dim}")
            }
            Self::InvalidRadius => f.write_str("initial radius must be positive and finite"),
            Self::InvalidGrowth => f.write_str("growth must exceed 1 and be finite"),
        }
    }
}

impl core::error::Error for Error {}
