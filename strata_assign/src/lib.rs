// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Assign: survey-geometry queries built on [`strata_kdtree`].
//!
//! ## Overview
//!
//! Two recurring jobs in seismic processing reduce to spatial lookups over survey
//! points:
//!
//! - [`ProfileAssigner`](crate::profile::ProfileAssigner) finds, for each trace, the
//!   nearest point of a profile (for example a crooked-line CMP profile). Traces
//!   usually arrive in spatial sequence, so each query seeds its search radius from
//!   the previous answer.
//! - [`WindowAverager`](crate::window::WindowAverager) averages a value column over
//!   a rectangular window, the building block of floating-datum and long-wavelength
//!   statics computations.
//!
//! The assigner returns the same point, distance, and tie count as an exhaustive
//! scan; turn on [`AssignConfig::verify`](crate::profile::AssignConfig::verify) to
//! check that on every query.
//!
//! ## Example
//!
//! ```rust
//! use strata_assign::profile::{AssignConfig, ProfileAssigner};
//!
//! // A straight profile with points every 25 m.
//! let x: Vec<f64> = (0..40).map(|i| f64::from(i) * 25.0).collect();
//! let y = vec![0.0; 40];
//! let mut assigner = ProfileAssigner::new(&x, &y, None, AssignConfig::default());
//!
//! let a = assigner.assign(260.0, 10.0).unwrap();
//! assert_eq!(a.index, 10);
//! // The next trace is close by and reuses the previous distance as a hint.
//! let b = assigner.assign(290.0, 10.0).unwrap();
//! assert_eq!(b.index, 12);
//! assert_eq!(assigner.stats().assigned, 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default) or `libm`: square roots for `no_std` builds.
//! - `kurbo`: [`adapters::kurbo`] converts `kurbo` points and rectangles.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod profile;
pub mod window;

pub use profile::{AssignConfig, AssignStats, Assignment, ProfileAssigner};
pub use window::{WindowAverager, WindowMean};
