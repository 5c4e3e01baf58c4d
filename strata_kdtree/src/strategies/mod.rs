// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search strategies.
//!
//! - `kdtree`: axis-alternating binary search tree built once by insertion. Range and
//!   exact-nearest queries prune subtrees against the extent only, so they visit every
//!   in-extent point; narrow extents keep them fast.
//! - `brute`: linear scan. Cheaper than a tree for a handful of points, and the oracle
//!   the tree is checked against.
//!
//! Both resolve ties through the same running minimum, so for any query they return
//! the same index, squared distance and tie count.

pub mod brute;
pub mod kdtree;
