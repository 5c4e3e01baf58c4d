// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion orders for tree construction.

use alloc::vec;
use alloc::vec::Vec;

/// Order in which points are inserted into a [`KdTree`](crate::KdTree).
///
/// The tree is an unbalanced binary search tree, so insertion order decides its
/// shape. Survey data usually arrives sorted by line or shot number, which makes
/// [`Natural`](Self::Natural) order degenerate into a linked list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BuildOrder {
    /// Insert points in array order.
    Natural,
    /// Insert points by [`dispersed_order`], medians of ever finer strides first.
    #[default]
    Dispersed,
}

impl BuildOrder {
    /// The insertion sequence for `n` points.
    pub fn sequence(self, n: usize) -> Vec<usize> {
        match self {
            Self::Natural => (0..n).collect(),
            Self::Dispersed => dispersed_order(n),
        }
    }
}

/// A permutation of `0..n` that spreads consecutive indices apart.
///
/// Starting with a stride of `n`, every pass visits `s/2, s/2 + s, s/2 + 2s, ...`
/// and schedules the indices not yet taken, then halves the stride. The last pass
/// uses stride 1 and picks up everything left. For sorted input this inserts the
/// middle element first, then the quartiles, and so on.
///
/// No balance is guaranteed; the tree is only much shallower than with the natural
/// order on monotonic input.
pub fn dispersed_order(n: usize) -> Vec<usize> {
    let mut taken = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut stride = n;
    while order.len() < n {
        let mut k = stride / 2;
        while k < n {
            if !taken[k] {
                taken[k] = true;
                order.push(k);
            }
            k += stride;
        }
        if stride == 1 {
            break;
        }
        stride /= 2;
    }
    debug_assert_eq!(order.len(), n, "dispersed order must be a permutation");
    order
}
