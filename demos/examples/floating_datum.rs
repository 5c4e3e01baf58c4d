// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating datum from surface elevations.
//!
//! Smooths station elevations over a moving window, then evaluates the datum at
//! CMP locations given as `kurbo` points, falling back to the nearest station
//! where the window is empty.
//!
//! Run:
//! - `cargo run -p strata_demos --example floating_datum`

use kurbo::{Point, Rect};
use strata_assign::WindowAverager;
use strata_assign::adapters::kurbo::{PlanarColumns, extent_from_rect};

fn main() {
    // Stations on a gentle slope with a bump in the middle.
    let stations: Vec<Point> = (0..60_u32)
        .map(|i| Point::new(f64::from(i) * 25.0, f64::from(i % 3) * 2.0))
        .collect();
    let elevation: Vec<f64> = (0..60_u32)
        .map(|i| 100.0 + f64::from(i) * 0.5 + if (25..35).contains(&i) { 8.0 } else { 0.0 })
        .collect();

    let cols = PlanarColumns::from_points(&stations);
    let datum = WindowAverager::new(&cols.x, &cols.y, &elevation);

    let smoothed = datum.smooth(100.0, 50.0);
    for (i, (raw, s)) in elevation.iter().zip(&smoothed).enumerate().step_by(10) {
        println!("station {i:2}: elevation {raw:6.2} -> datum {s:6.2}");
    }

    // CMPs, one of them off the end of the line.
    let cmps = [Point::new(312.5, 1.0), Point::new(740.0, 0.0), Point::new(2500.0, 0.0)];
    for cmp in cmps {
        let value = datum
            .mean_or_nearest(cmp.x, cmp.y, 100.0, 50.0)
            .expect("a finite CMP always has a nearest station");
        println!("cmp ({:7.1}, {:4.1}): datum {value:6.2}", cmp.x, cmp.y);
    }

    // The same window as a kurbo rectangle.
    let window = extent_from_rect(Rect::new(640.0, -50.0, 840.0, 50.0));
    println!("window extent: {window:?}");
}
