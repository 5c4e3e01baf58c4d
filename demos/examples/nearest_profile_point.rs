// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assign traces to the nearest point of a crooked-line profile.
//!
//! The profile bends back on itself, so the second half is restricted by station
//! band. Traces arrive in order along the line, which lets each query seed its
//! search radius from the previous distance.
//!
//! Run:
//! - `cargo run -p strata_demos --example nearest_profile_point`

use strata_assign::{AssignConfig, ProfileAssigner};

fn main() {
    // A hairpin: out along y = 0, back along y = 40, 12.5 m station spacing.
    let half = 80_u32;
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut station = Vec::new();
    for i in 0..2 * half {
        let (px, py) = if i < half {
            (f64::from(i) * 12.5, 0.0)
        } else {
            (f64::from(2 * half - 1 - i) * 12.5, 40.0)
        };
        x.push(px);
        y.push(py);
        station.push(1000.0 + f64::from(i));
    }

    let config = AssignConfig {
        verify: true,
        ..AssignConfig::default()
    };
    let mut assigner = ProfileAssigner::new(&x, &y, Some(&station), config);

    // Traces scattered about halfway between the legs; the band picks the leg.
    let mut outbound = Vec::new();
    for t in 0..half {
        let tx = f64::from(t) * 12.5 + 3.0;
        let a = assigner
            .assign_in_band(tx, 19.0, 1000.0, 1000.0 + f64::from(half))
            .expect("the outbound leg covers every trace");
        outbound.push(a.index);
    }
    let stats = assigner.stats();
    println!(
        "outbound: {} traces, {} search windows, {} ties",
        stats.queries, stats.cycles, stats.ties
    );
    assert!(outbound.iter().all(|&i| i < half as usize));

    // Without a band the nearer leg wins.
    assigner.reset_hint();
    let free = assigner.assign(500.0, 21.0).expect("profile is not empty");
    println!("unbanded trace at (500, 21) -> station {}", station[free.index]);
    assert!(free.index >= half as usize);
}
