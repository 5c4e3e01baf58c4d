// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radius-expansion nearest search for wide or unbounded extents.

use crate::error::Error;
use crate::math::sqrt;
use crate::search::Search;
use crate::types::{Extent, Nearest};

/// Window edges are rounded; a hit must sit this far (relatively) inside the window
/// before the window is trusted to contain every equal or closer point.
const EDGE_SLACK: f64 = 1.0 + 1e-9;

/// Radius multiplier applied when a hit lies outside the inscribed circle.
const REACH: f64 = 1.001;

/// Parameters for [`cycle_for_near`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdaptiveConfig {
    /// Half-width of the first search window in every metric dimension.
    pub init_radius: f64,
    /// Factor the half-width grows by after a cycle that found nothing.
    pub growth: f64,
}

impl AdaptiveConfig {
    /// Create a configuration.
    pub const fn new(init_radius: f64, growth: f64) -> Self {
        Self {
            init_radius,
            growth,
        }
    }

    /// Seed the first window from a previous query's squared distance.
    ///
    /// The radius becomes `sqrt(prev_dist_sq) * scale`, but never less than `floor`;
    /// a hint that overflows to infinity falls back to `floor`.
    /// Queries issued in spatial sequence then usually succeed in one cycle.
    #[must_use]
    pub fn with_hint(self, prev_dist_sq: f64, scale: f64, floor: f64) -> Self {
        let hinted = sqrt(prev_dist_sq) * scale;
        Self {
            init_radius: if hinted > floor && hinted.is_finite() {
                hinted
            } else {
                floor
            },
            ..self
        }
    }

    /// Check that `init_radius` is positive and finite and `growth` is finite and
    /// above 1, the conditions under which the search terminates.
    pub fn check(&self) -> Result<(), Error> {
        if !(self.init_radius > 0.0 && self.init_radius.is_finite()) {
            return Err(Error::InvalidRadius);
        }
        if !(self.growth > 1.0 && self.growth.is_finite()) {
            return Err(Error::InvalidGrowth);
        }
        Ok(())
    }
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self::new(1.0, 2.0)
    }
}

/// Result of [`cycle_for_near`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdaptiveNearest {
    /// Same as the wrapped strategy's `find_near` over the full extent.
    pub nearest: Option<Nearest>,
    /// Number of windows searched; zero when the extent holds no point's bounds.
    pub cycles: u32,
    /// Half-width of the last window.
    pub radius: f64,
}

/// Nearest in-extent point to `target`, searching growing windows around it.
///
/// Each cycle searches `target[i] ± r` (clipped to the extent) in every metric
/// dimension, with non-metric dimensions left at the full extent:
///
/// - nothing found: stop if the window already spans the whole extent, otherwise
///   multiply `r` by `growth`;
/// - a hit at distance `d` with `d >= r`: a square window under-covers the circle of
///   radius `d`, so retry once with `r = d * 1.001`, which must contain the answer;
/// - otherwise the hit is the answer.
///
/// The extent is first clipped to the bounds of the points, so infinite extents and
/// extents holding no points terminate too. The answer, including tie resolution
/// and tie count, equals [`Search::find_near`] over the full extent.
///
/// # Panics
///
/// Panics if the extent or target do not match the point set's dimensions, if the
/// target is not finite in a metric dimension, if `init_radius` is not positive and
/// finite, or if `growth` is not above 1.
pub fn cycle_for_near<S: Search + ?Sized>(
    search: &S,
    extent: &Extent,
    target: &[f64],
    config: AdaptiveConfig,
) -> AdaptiveNearest {
    let points = search.points();
    points.check_query(extent, Some(target));
    if let Err(e) = config.check() {
        panic!("invalid adaptive config: {e}");
    }

    let metric = points.metric();
    assert!(
        metric.iter().zip(target).all(|(m, t)| !m || t.is_finite()),
        "target must be finite in every metric dimension"
    );
    let metric_dims = metric.iter().filter(|m| **m).count();
    let mut radius = config.init_radius;

    let Some(clipped) = clip(extent, search.bounds()) else {
        tracing::trace!("extent misses the point bounds");
        return AdaptiveNearest {
            nearest: None,
            cycles: 0,
            radius,
        };
    };

    let mut window = clipped.clone();
    let mut cycles = 0_u32;
    loop {
        cycles += 1;
        let mut covered = 0;
        for (d, _) in metric.iter().enumerate().filter(|(_, m)| **m) {
            let (full_lo, full_hi) = (clipped.min()[d], clipped.max()[d]);
            // Widen by an ulp so rounding of `target ± r` never drops an edge point.
            let mut lo = (target[d] - radius).next_down();
            let mut hi = (target[d] + radius).next_up();
            let mut sides = 0;
            if lo <= full_lo {
                lo = full_lo;
                sides += 1;
            }
            if hi >= full_hi {
                hi = full_hi;
                sides += 1;
            }
            if sides == 2 {
                covered += 1;
            }
            // A target far outside the extent leaves `lo > hi`, which admits nothing.
            window.set(d, lo, hi);
        }
        let whole = covered == metric_dims;
        let found = search.find_near(&window, target);
        tracing::trace!(
            cycle = cycles,
            radius,
            covered,
            found = ?found.map(|n| n.index),
            "adaptive nearest cycle"
        );

        match found {
            None if whole => break AdaptiveNearest {
                nearest: None,
                cycles,
                radius,
            },
            None => radius *= config.growth,
            Some(n) if !whole && n.dist_sq * EDGE_SLACK >= radius * radius => {
                radius = sqrt(n.dist_sq) * REACH;
            }
            Some(n) => break AdaptiveNearest {
                nearest: Some(n),
                cycles,
                radius,
            },
        }
    }
}

/// Intersect `extent` with `bounds`; `None` when the intersection is empty.
fn clip(extent: &Extent, bounds: &Extent) -> Option<Extent> {
    let mut out = extent.clone();
    for d in 0..extent.dims() {
        let lo = extent.min()[d].max(bounds.min()[d]);
        let hi = extent.max()[d].min(bounds.max()[d]);
        if lo >= hi {
            return None;
        }
        out.set(d, lo, hi);
    }
    Some(out)
}
