// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that live in `std`, with a `libm` fallback for `no_std` builds.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("strata_kdtree requires either the `std` or the `libm` feature");

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}
