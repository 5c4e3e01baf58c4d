// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowed averages of a per-point value.
//!
//! Floating-datum computation averages surface elevation over a window around each
//! CMP; long-wavelength statics average per-station statics the same way. Both are
//! a range query followed by a mean, with a nearest-point fallback where the survey
//! is too sparse for the window.

use alloc::vec::Vec;

use strata_kdtree::{
    AdaptiveConfig, BuildOrder, Error, Extent, KdTree, PointSet, Search, cycle_for_near,
};

/// Mean of the values inside one window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowMean {
    /// Arithmetic mean.
    pub mean: f64,
    /// Number of points averaged.
    pub count: usize,
}

/// Averages a value column over rectangular windows in the `(x, y)` plane.
#[derive(Clone, Debug)]
pub struct WindowAverager<'a> {
    tree: KdTree<'a>,
    values: &'a [f64],
}

impl<'a> WindowAverager<'a> {
    /// Build over `x.len()` points; `y` and `values` must be at least as long.
    ///
    /// A short `values` column is reported as [`Error::ShortColumn`] with `dim` 2.
    pub fn try_new(x: &'a [f64], y: &'a [f64], values: &'a [f64]) -> Result<Self, Error> {
        let points = PointSet::try_new(x.len(), &[x, y])?;
        if values.len() < x.len() {
            return Err(Error::ShortColumn {
                dim: 2,
                len: values.len(),
                needed: x.len(),
            });
        }
        Ok(Self {
            tree: KdTree::build(points, BuildOrder::Dispersed),
            values: &values[..x.len()],
        })
    }

    /// Build over `x.len()` points.
    ///
    /// # Panics
    ///
    /// Panics when [`WindowAverager::try_new`] would return an error.
    #[track_caller]
    pub fn new(x: &'a [f64], y: &'a [f64], values: &'a [f64]) -> Self {
        match Self::try_new(x, y, values) {
            Ok(averager) => averager,
            Err(e) => panic!("invalid window columns: {e}"),
        }
    }

    /// Mean value over points with `|x - cx| <= half_width`, `|y - cy| <= half_height`
    /// (the upper edges exclusive); `None` when no point is inside.
    ///
    /// # Panics
    ///
    /// Panics if the center or a half size is NaN, or if a half size is negative.
    pub fn mean_in(
        &self,
        cx: f64,
        cy: f64,
        half_width: f64,
        half_height: f64,
    ) -> Option<WindowMean> {
        let window = Extent::new(
            &[cx - half_width, cy - half_height],
            &[cx + half_width, cy + half_height],
        );
        let mut inside = Vec::new();
        self.tree.find_in(&window, &mut inside);
        if inside.is_empty() {
            return None;
        }
        let sum: f64 = inside.iter().map(|&i| self.values[i]).sum();
        let mean = sum / inside.len() as f64;
        Some(WindowMean {
            mean,
            count: inside.len(),
        })
    }

    /// [`mean_in`](Self::mean_in), or the nearest point's value when the window is empty.
    ///
    /// # Panics
    ///
    /// Panics if the center is not finite, or if a half size is NaN or negative.
    pub fn mean_or_nearest(
        &self,
        cx: f64,
        cy: f64,
        half_width: f64,
        half_height: f64,
    ) -> Option<f64> {
        if let Some(m) = self.mean_in(cx, cy, half_width, half_height) {
            return Some(m.mean);
        }
        let reach = half_width.max(half_height);
        let config = AdaptiveConfig {
            init_radius: if reach > 0.0 { reach } else { 1.0 },
            ..AdaptiveConfig::default()
        };
        let found = cycle_for_near(&self.tree, &Extent::unbounded(2), &[cx, cy], config);
        found.nearest.map(|n| self.values[n.index])
    }

    /// The window mean around every input point, in input order.
    ///
    /// A point is inside its own window whenever the half sizes are positive; with a
    /// zero half size (or one lost to rounding) the point keeps its own value.
    pub fn smooth(&self, half_width: f64, half_height: f64) -> Vec<f64> {
        let points = self.tree.points();
        let (x, y) = (points.column(0), points.column(1));
        (0..points.len())
            .map(|i| {
                self.mean_in(x[i], y[i], half_width, half_height)
                    .map_or(self.values[i], |m| m.mean)
            })
            .collect()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: construction rejects empty columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    // A 4 x 4 grid with 10 m spacing; value = 100 + x.
    fn grid() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for j in 0..4_u32 {
            for i in 0..4_u32 {
                x.push(f64::from(i) * 10.0);
                y.push(f64::from(j) * 10.0);
            }
        }
        let v = x.iter().map(|x| 100.0 + x).collect();
        (x, y, v)
    }

    #[test]
    fn mean_over_window() {
        let (x, y, v) = grid();
        let w = WindowAverager::new(&x, &y, &v);
        // Columns x = 0 and x = 10, all rows.
        let m = w.mean_in(5.0, 15.0, 10.0, 20.0).expect("window holds points");
        assert_eq!(m.count, 8);
        assert_eq!(m.mean, 105.0);
    }

    #[test]
    fn upper_window_edge_is_exclusive() {
        let (x, y, v) = grid();
        let w = WindowAverager::new(&x, &y, &v);
        // x in [0, 10), y in [0, 10): only the origin.
        let m = w.mean_in(5.0, 5.0, 5.0, 5.0).expect("origin is inside");
        assert_eq!((m.count, m.mean), (1, 100.0));
    }

    #[test]
    fn empty_window_falls_back_to_nearest() {
        let (x, y, v) = grid();
        let w = WindowAverager::new(&x, &y, &v);
        assert_eq!(w.mean_in(100.0, 100.0, 1.0, 1.0), None);
        // Nearest to (100, 2) is (30, 0).
        assert_eq!(w.mean_or_nearest(100.0, 2.0, 1.0, 1.0), Some(130.0));
        // A non-empty window wins over the fallback.
        assert_eq!(w.mean_or_nearest(0.0, 0.0, 1.0, 1.0), Some(100.0));
        // Zero half sizes still fall back.
        assert_eq!(w.mean_or_nearest(21.0, 19.0, 0.0, 0.0), Some(120.0));
    }

    #[test]
    fn smooth_averages_neighbours() {
        let x = [0.0, 1.0, 2.0, 50.0];
        let y = [0.0, 0.0, 0.0, 0.0];
        let v = [1.0, 2.0, 6.0, 10.0];
        let w = WindowAverager::new(&x, &y, &v);
        // Half width 1.5: [-1.5, 1.5), [-0.5, 2.5), [0.5, 3.5), isolated.
        assert_eq!(w.smooth(1.5, 1.0), vec![1.5, 3.0, 4.0, 10.0]);
        assert_eq!(w.smooth(0.0, 0.0), v.to_vec());
    }

    #[test]
    #[should_panic(expected = "invalid extent")]
    fn nan_center_panics() {
        let (x, y, v) = grid();
        let w = WindowAverager::new(&x, &y, &v);
        let _ = w.mean_in(f64::NAN, 0.0, 10.0, 10.0);
    }

    #[test]
    #[should_panic(expected = "invalid extent")]
    fn negative_half_size_panics() {
        let (x, y, v) = grid();
        let w = WindowAverager::new(&x, &y, &v);
        let _ = w.mean_in(0.0, 0.0, 10.0, -1.0);
    }

    #[test]
    fn short_values_column_is_an_error() {
        let x = [0.0, 1.0];
        let y = [0.0, 1.0];
        let v = [5.0];
        assert_eq!(
            WindowAverager::try_new(&x, &y, &v).unwrap_err(),
            Error::ShortColumn {
                dim: 2,
                len: 1,
                needed: 2
            }
        );
        assert_eq!(WindowAverager::new(&x, &y, &[1.0, 2.0, 3.0]).len(), 2);
    }
}
