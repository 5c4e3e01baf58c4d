// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-profile-point assignment for a stream of traces.
//!
//! A profile is a sequence of points in the survey plane, optionally numbered by
//! station. Each trace midpoint is assigned to the nearest profile point. When a
//! station column is given it becomes a third, non-metric dimension: a query can be
//! limited to a station band (so a profile that loops back near itself is not
//! confused with its other leg) without the station number affecting distance.

use strata_kdtree::{
    AdaptiveConfig, BuildOrder, Error, Extent, KdTree, Nearest, PointSet, Search, brute_near,
    cycle_for_near,
};

/// Parameters for [`ProfileAssigner`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AssignConfig {
    /// Radius growth factor between search cycles that found nothing.
    pub growth: f64,
    /// The first window of a query has half-width `previous distance * hint_scale`.
    pub hint_scale: f64,
    /// Lower limit on the first window's half-width.
    pub min_radius: f64,
    /// Tree insertion order.
    pub order: BuildOrder,
    /// Cross-check every result against a linear scan and panic on disagreement.
    pub verify: bool,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            growth: 2.0,
            hint_scale: 1.5,
            min_radius: 1.0,
            order: BuildOrder::Dispersed,
            verify: false,
        }
    }
}

/// One trace's assignment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Assignment {
    /// Index of the profile point.
    pub index: usize,
    /// Distance from the trace to that point.
    pub distance: f64,
    /// Other profile points at exactly the same distance.
    pub ties: u64,
    /// Search windows examined.
    pub cycles: u32,
}

/// Running totals over every query since construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignStats {
    /// Queries issued.
    pub queries: u64,
    /// Queries that found a point.
    pub assigned: u64,
    /// Queries with no candidate in range.
    pub unassigned: u64,
    /// Search windows examined in total.
    pub cycles: u64,
    /// Assignments that resolved a tie.
    pub ties: u64,
}

/// Assigns traces to their nearest profile point.
#[derive(Clone, Debug)]
pub struct ProfileAssigner<'a> {
    tree: KdTree<'a>,
    config: AssignConfig,
    has_station: bool,
    hint: Option<f64>,
    stats: AssignStats,
}

impl<'a> ProfileAssigner<'a> {
    /// Build an assigner over profile columns.
    ///
    /// The profile has `x.len()` points; `y` and `station` must be at least as long.
    /// `min_radius` must be positive and finite, `hint_scale` finite and not
    /// negative, and `growth` finite and above 1.
    pub fn try_new(
        x: &'a [f64],
        y: &'a [f64],
        station: Option<&'a [f64]>,
        config: AssignConfig,
    ) -> Result<Self, Error> {
        AdaptiveConfig::new(config.min_radius, config.growth).check()?;
        if !(config.hint_scale >= 0.0 && config.hint_scale.is_finite()) {
            return Err(Error::InvalidRadius);
        }
        let points = match station {
            Some(s) => {
                PointSet::try_new(x.len(), &[x, y, s])?.try_with_metric(&[true, true, false])?
            }
            None => PointSet::try_new(x.len(), &[x, y])?,
        };
        Ok(Self {
            tree: KdTree::build(points, config.order),
            config,
            has_station: station.is_some(),
            hint: None,
            stats: AssignStats::default(),
        })
    }

    /// Build an assigner over profile columns.
    ///
    /// # Panics
    ///
    /// Panics when [`ProfileAssigner::try_new`] would return an error.
    #[track_caller]
    pub fn new(
        x: &'a [f64],
        y: &'a [f64],
        station: Option<&'a [f64]>,
        config: AssignConfig,
    ) -> Self {
        match Self::try_new(x, y, station, config) {
            Ok(assigner) => assigner,
            Err(e) => panic!("invalid profile: {e}"),
        }
    }

    /// Nearest profile point to `(x, y)`.
    pub fn assign(&mut self, x: f64, y: f64) -> Option<Assignment> {
        let dims = self.tree.points().dims();
        self.query(&Extent::unbounded(dims), x, y)
    }

    /// Nearest profile point to `(x, y)` among stations `lo <= s < hi`.
    ///
    /// # Panics
    ///
    /// Panics if the assigner has no station column or if `lo > hi`.
    pub fn assign_in_band(&mut self, x: f64, y: f64, lo: f64, hi: f64) -> Option<Assignment> {
        assert!(self.has_station, "station band queries need a station column");
        let band = Extent::unbounded(3).with_bounds(2, lo, hi);
        self.query(&band, x, y)
    }

    /// Forget the previous distance; the next query starts from `min_radius`.
    pub fn reset_hint(&mut self) {
        self.hint = None;
    }

    /// Totals since construction.
    pub fn stats(&self) -> AssignStats {
        self.stats
    }

    /// The underlying tree.
    pub fn tree(&self) -> &KdTree<'a> {
        &self.tree
    }

    fn query(&mut self, extent: &Extent, x: f64, y: f64) -> Option<Assignment> {
        let target = [x, y, 0.0];
        let target = &target[..self.tree.points().dims()];

        let mut adaptive = AdaptiveConfig::new(self.config.min_radius, self.config.growth);
        if let Some(prev) = self.hint {
            adaptive = adaptive.with_hint(prev, self.config.hint_scale, self.config.min_radius);
        }
        let result = cycle_for_near(&self.tree, extent, target, adaptive);

        if self.config.verify {
            let expected = brute_near(self.tree.points(), extent, target);
            assert_eq!(
                result.nearest, expected,
                "adaptive assignment of ({x}, {y}) disagrees with a linear scan"
            );
        }
        if result.cycles > 1 {
            tracing::debug!(
                x,
                y,
                cycles = result.cycles,
                radius = result.radius,
                "assignment needed a wider search"
            );
        }

        self.stats.queries += 1;
        self.stats.cycles += u64::from(result.cycles);
        match result.nearest {
            Some(n) => {
                self.stats.assigned += 1;
                if n.ties > 0 {
                    self.stats.ties += 1;
                }
                self.hint = Some(n.dist_sq);
                Some(assignment(n, result.cycles))
            }
            None => {
                self.stats.unassigned += 1;
                None
            }
        }
    }
}

fn assignment(n: Nearest, cycles: u32) -> Assignment {
    Assignment {
        index: n.index,
        distance: n.distance(),
        ties: n.ties,
        cycles,
    }
}
