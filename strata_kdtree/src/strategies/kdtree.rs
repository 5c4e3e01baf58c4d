// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-alternating k-d tree built once by binary-search-tree insertion.

use alloc::vec::Vec;

use crate::order::BuildOrder;
use crate::points::PointSet;
use crate::search::Search;
use crate::types::{Best, Extent, Nearest};

/// A k-d tree over a borrowed [`PointSet`].
///
/// The tree holds exactly one node per point in a flat arena; node 0 is the root.
/// The splitting axis cycles `0, 1, .., D-1, 0, ..` with depth. Below a node with
/// axis `a`, the left subtree holds points whose coordinate `a` is strictly less
/// than the node's, the right subtree the rest.
///
/// Queries prune against the extent only, never against the best distance found so
/// far. Every in-extent point is therefore visited, which is what makes tie counts
/// exact; use [`cycle_for_near`](crate::cycle_for_near) when extents are wide.
#[derive(Clone, Debug)]
pub struct KdTree<'a> {
    points: PointSet<'a>,
    nodes: Vec<Node>,
    bounds: Extent,
    depth: usize,
    order: BuildOrder,
}

#[derive(Copy, Clone, Debug)]
struct Node {
    element: usize,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const ROOT: Self = Self(0);

    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

impl<'a> KdTree<'a> {
    /// Build a tree over `points`, inserting them in `order`.
    pub fn build(points: PointSet<'a>, order: BuildOrder) -> Self {
        let n = points.len();
        let dims = points.dims();
        let mut nodes: Vec<Node> = Vec::with_capacity(n);
        let mut depth = 1;

        for element in order.sequence(n) {
            let slot = NodeIdx::new(nodes.len());
            nodes.push(Node {
                element,
                left: None,
                right: None,
            });
            if slot == NodeIdx::ROOT {
                continue;
            }

            let mut cur = NodeIdx::ROOT;
            let mut axis = 0;
            let mut level = 1;
            loop {
                let here = nodes[cur.get()];
                let go_left = points.coord(element, axis) < points.coord(here.element, axis);
                let child = if go_left { here.left } else { here.right };
                match child {
                    Some(child) => {
                        cur = child;
                        axis = next_axis(axis, dims);
                        level += 1;
                    }
                    None => {
                        let parent = &mut nodes[cur.get()];
                        if go_left {
                            parent.left = Some(slot);
                        } else {
                            parent.right = Some(slot);
                        }
                        depth = depth.max(level + 1);
                        break;
                    }
                }
            }
        }

        tracing::debug!(points = n, dims, depth, ?order, "built k-d tree");
        let bounds = points.bounds();
        Self {
            points,
            nodes,
            bounds,
            depth,
            order,
        }
    }

    /// Number of points (and nodes).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: point sets are never empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels on the longest root-to-leaf path; a lone root has depth 1.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The insertion order the tree was built with.
    pub fn order(&self) -> BuildOrder {
        self.order
    }

    #[cfg(test)]
    fn root_element(&self) -> usize {
        self.nodes[NodeIdx::ROOT.get()].element
    }

    /// Every point index inside `extent`, in traversal order.
    ///
    /// # Panics
    ///
    /// Panics if `extent` does not match the point set's dimensions.
    pub fn find_in(&self, extent: &Extent, out: &mut Vec<usize>) {
        self.points.check_query(extent, None);
        out.clear();
        self.visit_in(extent, |element| out.push(element));
    }

    /// The in-extent point closest to `target`; ties go to the highest index.
    ///
    /// # Panics
    ///
    /// Panics if `extent` or `target` do not match the point set's dimensions.
    pub fn find_near(&self, extent: &Extent, target: &[f64]) -> Option<Nearest> {
        self.points.check_query(extent, Some(target));
        let mut best = Best::default();
        self.visit_in(extent, |element| {
            best.offer(element, self.points.dist_sq(element, target));
        });
        best.finish()
    }

    /// Depth-first walk calling `visit` for each in-extent point.
    ///
    /// The left subtree can only hold qualifying points if the node's coordinate on
    /// the split axis is at least the extent minimum; the right subtree only if it
    /// is below the extent maximum.
    fn visit_in(&self, extent: &Extent, mut visit: impl FnMut(usize)) {
        let dims = self.points.dims();
        let mut stack: Vec<(NodeIdx, usize)> = Vec::with_capacity(self.depth + 1);
        stack.push((NodeIdx::ROOT, 0));
        while let Some((idx, axis)) = stack.pop() {
            let node = &self.nodes[idx.get()];
            if self.points.in_extent(node.element, extent) {
                visit(node.element);
            }
            let split = self.points.coord(node.element, axis);
            let next = next_axis(axis, dims);
            if let Some(right) = node.right
                && split < extent.max()[axis]
            {
                stack.push((right, next));
            }
            if let Some(left) = node.left
                && split >= extent.min()[axis]
            {
                stack.push((left, next));
            }
        }
    }
}

impl Search for KdTree<'_> {
    fn points(&self) -> &PointSet<'_> {
        &self.points
    }

    fn bounds(&self) -> &Extent {
        &self.bounds
    }

    fn find_in(&self, extent: &Extent, out: &mut Vec<usize>) {
        Self::find_in(self, extent, out);
    }

    fn find_near(&self, extent: &Extent, target: &[f64]) -> Option<Nearest> {
        Self::find_near(self, extent, target)
    }
}

#[inline]
fn next_axis(axis: usize, dims: usize) -> usize {
    if axis + 1 == dims { 0 } else { axis + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Walk every root-to-leaf path checking the split rule against all ancestors.
    fn assert_bst(tree: &KdTree<'_>) {
        let dims = tree.points.dims();
        // (node, axis, constraints: (ancestor element, axis, went_left))
        let mut stack = vec![(NodeIdx::ROOT, 0_usize, Vec::<(usize, usize, bool)>::new())];
        let mut seen = 0;
        while let Some((idx, axis, path)) = stack.pop() {
            seen += 1;
            let node = tree.nodes[idx.get()];
            for &(anc, a, left) in &path {
                let c = tree.points.coord(node.element, a);
                let s = tree.points.coord(anc, a);
                if left {
                    assert!(c < s, "left descendant must be strictly below its ancestor");
                } else {
                    assert!(c >= s, "right descendant must not be below its ancestor");
                }
            }
            for (child, left) in [(node.left, true), (node.right, false)] {
                if let Some(child) = child {
                    let mut p = path.clone();
                    p.push((node.element, axis, left));
                    stack.push((child, next_axis(axis, dims), p));
                }
            }
        }
        assert_eq!(seen, tree.len(), "every node must be reachable from the root");
    }

    #[test]
    fn bst_invariant_holds_for_random_points() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0001);
        let n = 300;
        let x: Vec<f64> = (0..n).map(|_| rng.random_range(-50.0..50.0)).collect();
        let y: Vec<f64> = (0..n).map(|_| rng.random_range(-50.0..50.0)).collect();
        // Coarse grid so equal split coordinates occur.
        let z: Vec<f64> = (0..n).map(|_| f64::from(rng.random_range(0..5_i32))).collect();
        for order in [BuildOrder::Natural, BuildOrder::Dispersed] {
            let tree = KdTree::build(PointSet::new(n, &[&x, &y, &z]), order);
            assert_eq!(tree.len(), n);
            assert_bst(&tree);
        }
    }

    #[test]
    fn dispersal_keeps_sorted_input_shallow() {
        let n = 1024;
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..n).map(|i| 2.0 * i as f64).collect();
        let natural = KdTree::build(PointSet::new(n, &[&x, &y]), BuildOrder::Natural);
        let dispersed = KdTree::build(PointSet::new(n, &[&x, &y]), BuildOrder::Dispersed);
        assert_eq!(natural.depth(), n);
        assert!(
            dispersed.depth() <= 2 * 11,
            "depth {} too large for sorted input",
            dispersed.depth()
        );
        assert_eq!(dispersed.root_element(), n / 2);
        assert_bst(&dispersed);
    }

    #[test]
    fn single_point_tree() {
        let x = [3.0];
        let tree = KdTree::build(PointSet::new(1, &[&x]), BuildOrder::Dispersed);
        assert_eq!(tree.depth(), 1);
        let n = tree
            .find_near(&Extent::unbounded(1), &[1.0])
            .expect("the only point is in range");
        assert_eq!((n.index, n.dist_sq, n.ties), (0, 4.0, 0));
    }

    #[test]
    fn degenerate_tree_does_not_recurse() {
        // Natural order over sorted input: a 5000-long chain.
        let n = 5_000;
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let tree = KdTree::build(PointSet::new(n, &[&x]), BuildOrder::Natural);
        let mut out = Vec::new();
        tree.find_in(&Extent::new(&[4_990.0], &[1e9]), &mut out);
        out.sort_unstable();
        assert_eq!(out, (4_990..5_000).collect::<Vec<_>>());
    }

    #[test]
    fn range_query_matches_scan() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0002);
        let n = 500;
        let x: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..100.0)).collect();
        let y: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..100.0)).collect();
        let tree = KdTree::build(PointSet::new(n, &[&x, &y]), BuildOrder::Dispersed);
        let mut out = Vec::new();
        for _ in 0..50 {
            let (x0, y0) = (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
            let (w, h) = (rng.random_range(0.0..40.0), rng.random_range(0.0..40.0));
            let e = Extent::new(&[x0, y0], &[x0 + w, y0 + h]);
            tree.find_in(&e, &mut out);
            out.sort_unstable();
            let expected: Vec<usize> = (0..n)
                .filter(|&i| x0 <= x[i] && x[i] < x0 + w && y0 <= y[i] && y[i] < y0 + h)
                .collect();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn duplicate_points_count_as_ties() {
        let x = [1.0, 1.0, 1.0, 4.0];
        let y = [1.0, 1.0, 1.0, 4.0];
        for order in [BuildOrder::Natural, BuildOrder::Dispersed] {
            let tree = KdTree::build(PointSet::new(4, &[&x, &y]), order);
            let n = tree
                .find_near(&Extent::unbounded(2), &[0.0, 0.0])
                .expect("points are in range");
            assert_eq!((n.index, n.dist_sq, n.ties), (2, 2.0, 2));
        }
    }
}
