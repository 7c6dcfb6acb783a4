use std::cmp::Ordering;

use geo_traits::{CoordTrait, RectTrait};
use tinyvec::TinyVec;

use crate::error::Result;
use crate::r#type::IndexableNum;
use crate::rangetree::{Node, RangeTree, RangeTreeMetadata};
use crate::util::{check_min_dims, point_in_range};

/// A trait for searching and accessing data out of a RangeTree.
pub trait RangeTreeIndex<N: IndexableNum, const K: usize>: Sized {
    /// The points of this level, sorted by [`dim`][Self::dim].
    fn points(&self) -> &[Vec<N>];

    /// The associated trees of this level, one per node position, or empty at the last
    /// dimension.
    fn associated_trees(&self) -> &[RangeTree<N, K>];

    /// Access the metadata describing this level.
    fn metadata(&self) -> &RangeTreeMetadata;

    /// Access the root node of this level for manual traversal, or `None` if the tree is empty.
    fn root(&self) -> Option<Node<'_, N, K>>;

    /// The number of points in this tree.
    fn num_items(&self) -> usize {
        self.metadata().num_items()
    }

    /// Returns `true` if the tree was built from no points.
    fn is_empty(&self) -> bool {
        self.num_items() == 0
    }

    /// The coordinate index this level is sorted by.
    fn dim(&self) -> usize {
        self.metadata().dim()
    }

    /// The height of this level's BST.
    fn height(&self) -> usize {
        self.metadata().height()
    }

    /// The total number of point copies held by this tree and all of its nested associated
    /// trees.
    fn stored_points(&self) -> usize {
        self.num_items()
            + self
                .associated_trees()
                .iter()
                .map(|tree| tree.stored_points())
                .sum::<usize>()
    }

    /// Search the tree for points within the box `[low, high]`, inclusive on every axis.
    ///
    /// The traversal prunes on this level's dimension only and checks the full `K`-dimensional
    /// membership of every node it reaches. Bounds with `low[i] > high[i]` on any axis yield an
    /// empty result.
    ///
    /// Returns the found points, each with all its stored coordinates. Fails if `low` or `high`
    /// has fewer than `K` coordinates.
    fn range(&self, low: &[N], high: &[N]) -> Result<Vec<&[N]>> {
        check_min_dims(low, K)?;
        check_min_dims(high, K)?;

        let points = self.points();
        let dim = self.dim();

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[usize; 64]> = TinyVec::new();
        stack.push(0);
        stack.push(points.len());

        let mut result: Vec<&[N]> = vec![];

        while !stack.is_empty() {
            let end = stack.pop().unwrap_or(0);
            let begin = stack.pop().unwrap_or(0);
            if begin >= end {
                continue;
            }

            let m = begin + (end - begin) / 2;
            let point = &points[m];
            let key = point[dim];

            if key < low[dim] {
                stack.push(m + 1);
                stack.push(end);
                continue;
            }

            if key > high[dim] {
                stack.push(begin);
                stack.push(m);
                continue;
            }

            // The key checks above pass incomparable keys and bounds through
            if point_in_range(point, low, high, K) {
                result.push(point.as_slice());
            }

            // Note: these are pushed in backwards order so the left half is searched first
            stack.push(m + 1);
            stack.push(end);
            stack.push(begin);
            stack.push(m);
        }

        Ok(result)
    }

    /// Returns `true` if a point equal to `point` on its first `K` coordinates is stored.
    ///
    /// This is a degenerate [`range`][Self::range] query with `low == high == point`.
    fn contains(&self, point: &[N]) -> Result<bool> {
        check_min_dims(point, K)?;
        Ok(!self.range(point, point)?.is_empty())
    }

    /// Search the tree for points within `[low, high]` by descending into associated trees.
    ///
    /// This locates the split node on this level's dimension, walks both boundary paths below
    /// it, and answers every subtree that lies wholly inside the range on this dimension from
    /// that subtree's associated tree. At the last dimension those subtrees are reported as a
    /// whole.
    ///
    /// Returns the same points as [`range`][Self::range], possibly in a different order.
    fn range_nested(&self, low: &[N], high: &[N]) -> Result<Vec<&[N]>> {
        check_min_dims(low, K)?;
        check_min_dims(high, K)?;

        let mut result = vec![];
        if let Some(root) = self.root() {
            collect_nested(root, low, high, &mut result);
        }

        // The nested descent only constrains coordinates from this level's dimension onwards
        if self.dim() > 0 {
            result.retain(|point| point_in_range(point, low, high, K));
        }
        Ok(result)
    }

    /// Search the tree for points within a given rectangle.
    ///
    /// Returns the found points.
    fn range_rect(&self, rect: &impl RectTrait<T = N>) -> Result<Vec<&[N]>> {
        let low = coord_values(&rect.min());
        let high = coord_values(&rect.max());
        self.range(&low, &high)
    }

    /// Returns `true` if the given coordinate is stored in the tree.
    fn contains_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<bool> {
        self.contains(&coord_values(coord))
    }
}

impl<N: IndexableNum, const K: usize> RangeTreeIndex<N, K> for RangeTree<N, K> {
    fn points(&self) -> &[Vec<N>] {
        &self.points
    }

    fn associated_trees(&self) -> &[RangeTree<N, K>] {
        &self.associated
    }

    fn metadata(&self) -> &RangeTreeMetadata {
        &self.metadata
    }

    fn root(&self) -> Option<Node<'_, N, K>> {
        Node::from_root(self)
    }
}

/// Collect the points of the subtree at `root` that lie within `[low, high]`.
fn collect_nested<'a, N: IndexableNum, const K: usize>(
    root: Node<'a, N, K>,
    low: &[N],
    high: &[N],
    result: &mut Vec<&'a [N]>,
) {
    let dim = root.dim();
    let (lo, hi) = (low[dim], high[dim]);
    if !matches!(lo.partial_cmp(&hi), Some(Ordering::Less | Ordering::Equal)) {
        return;
    }

    // Incomparable keys sort last, so anything not `<= hi` is treated as lying to the right
    let mut split = Some(root);
    while let Some(node) = split {
        let key = node.key();
        if key < lo {
            split = node.right_child();
        } else if key <= hi {
            break;
        } else {
            split = node.left_child();
        }
    }
    let Some(split) = split else {
        return;
    };
    report_point(split, low, high, result);

    // left boundary path: every right subtree hanging off it is within [lo, hi]
    let mut current = split.left_child();
    while let Some(node) = current {
        if node.key() >= lo {
            report_point(node, low, high, result);
            if let Some(right) = node.right_child() {
                collect_contained(right, low, high, result);
            }
            current = node.left_child();
        } else {
            current = node.right_child();
        }
    }

    // right boundary path: every left subtree hanging off it is within [lo, hi]
    let mut current = split.right_child();
    while let Some(node) = current {
        if node.key() <= hi {
            report_point(node, low, high, result);
            if let Some(left) = node.left_child() {
                collect_contained(left, low, high, result);
            }
            current = node.right_child();
        } else {
            current = node.left_child();
        }
    }
}

/// Collect the points of a subtree whose keys all lie within the range on its level's
/// dimension.
fn collect_contained<'a, N: IndexableNum, const K: usize>(
    node: Node<'a, N, K>,
    low: &[N],
    high: &[N],
    result: &mut Vec<&'a [N]>,
) {
    match node.associated_tree() {
        Some(tree) => {
            if let Some(root) = tree.root() {
                collect_nested(root, low, high, result);
            }
        }
        None => node.collect_points(result),
    }
}

#[inline]
fn report_point<'a, N: IndexableNum, const K: usize>(
    node: Node<'a, N, K>,
    low: &[N],
    high: &[N],
    result: &mut Vec<&'a [N]>,
) {
    let point = node.point();
    if point_in_range(point, low, high, K) {
        result.push(point);
    }
}

fn coord_values<N: IndexableNum>(coord: &impl CoordTrait<T = N>) -> Vec<N> {
    (0..coord.dim().size())
        .filter_map(|n| coord.nth(n))
        .collect()
}
