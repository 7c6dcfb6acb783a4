use std::array;
use std::cmp::Ordering;

use tinyvec::TinyVec;

use crate::error::{RangeIndexError, Result};
use crate::r#type::IndexableNum;
use crate::util::{check_exact_dims, point_in_range, sq_dist};

/// A node in the arena of a [`KDTree`].
#[derive(Debug, Clone, PartialEq)]
struct KDNode<N: IndexableNum, const K: usize> {
    point: [N; K],
    left: Option<usize>,
    right: Option<usize>,
}

/// A growable K-D Tree over points with exactly `K` coordinates.
///
/// A node at depth `d` splits on axis `d % K`: points with a smaller coordinate on that axis go
/// to its left subtree, the rest to its right subtree. Nodes live in an arena and refer to their
/// children by index. The tree is never rebalanced.
///
/// ```
/// use range_index::kdtree::KDTree;
///
/// let mut tree = KDTree::<i32, 2>::new();
/// tree.insert(&[3, 6]).unwrap();
/// tree.insert(&[17, 15]).unwrap();
/// tree.insert(&[13, 15]).unwrap();
///
/// assert!(tree.search(&[13, 15]).unwrap());
/// assert_eq!(tree.nearest_neighbor(&[14, 14]).unwrap(), &[13, 15]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<N: IndexableNum, const K: usize> {
    nodes: Vec<KDNode<N, K>>,
}

impl<N: IndexableNum, const K: usize> KDTree<N, K> {
    /// Create a new, empty tree.
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    /// The number of points in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no point has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a point into the tree.
    ///
    /// Fails if the point does not have exactly `K` coordinates.
    pub fn insert(&mut self, point: &[N]) -> Result<()> {
        if K == 0 {
            return Err(RangeIndexError::InvalidDimension { dim: 0, num_dims: 0 });
        }
        check_exact_dims(point, K)?;

        let index = self.nodes.len();
        self.nodes.push(KDNode {
            point: array::from_fn(|i| point[i]),
            left: None,
            right: None,
        });
        if index == 0 {
            return Ok(());
        }

        let mut current = 0;
        let mut axis = 0;
        loop {
            let node = &mut self.nodes[current];
            let child = if point[axis] < node.point[axis] {
                &mut node.left
            } else {
                &mut node.right
            };
            match *child {
                Some(next) => current = next,
                None => {
                    *child = Some(index);
                    return Ok(());
                }
            }
            axis = (axis + 1) % K;
        }
    }

    /// Returns `true` if a point equal to `point` on every coordinate has been inserted.
    ///
    /// Fails if the point does not have exactly `K` coordinates.
    pub fn search(&self, point: &[N]) -> Result<bool> {
        check_exact_dims(point, K)?;

        let mut current = self.root();
        let mut axis = 0;
        while let Some(index) = current {
            let node = &self.nodes[index];
            if node.point[..] == point[..] {
                return Ok(true);
            }
            current = if point[axis] < node.point[axis] {
                node.left
            } else {
                node.right
            };
            axis = (axis + 1) % K;
        }
        Ok(false)
    }

    /// Find the stored point closest to `point` by euclidean distance.
    ///
    /// When several points are equally close, the first one reached is returned. Fails if the
    /// point does not have exactly `K` coordinates or if the tree is empty.
    pub fn nearest_neighbor(&self, point: &[N]) -> Result<&[N; K]> {
        check_exact_dims(point, K)?;
        let root = self.root().ok_or(RangeIndexError::EmptyTree)?;

        let mut best = root;
        let mut best_dist = f64::INFINITY;

        // (node, axis, squared distance from the query to the node's half-space)
        let mut stack: TinyVec<[(usize, usize, f64); 32]> = TinyVec::new();
        stack.push((root, 0, 0.0));
        while let Some((index, axis, bound)) = stack.pop() {
            if bound >= best_dist {
                continue;
            }

            let node = &self.nodes[index];
            let dist = sq_dist(&node.point, point, K);
            if dist < best_dist {
                best = index;
                best_dist = dist;
            }

            let delta = point[axis].as_f64() - node.point[axis].as_f64();
            let (near, far) = if point[axis] < node.point[axis] {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            let next_axis = (axis + 1) % K;

            // Note: the far side is pushed first so the near side is searched first
            if let Some(far) = far {
                stack.push((far, next_axis, bound.max(delta * delta)));
            }
            if let Some(near) = near {
                stack.push((near, next_axis, bound));
            }
        }

        Ok(&self.nodes[best].point)
    }

    /// Search the tree for points within the box `[low, high]`, inclusive on every axis.
    ///
    /// Fails if `low` or `high` does not have exactly `K` coordinates.
    pub fn range(&self, low: &[N], high: &[N]) -> Result<Vec<&[N; K]>> {
        check_exact_dims(low, K)?;
        check_exact_dims(high, K)?;

        let mut result = vec![];
        let Some(root) = self.root() else {
            return Ok(result);
        };

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[usize; 64]> = TinyVec::new();
        stack.push(root);
        stack.push(0);

        while !stack.is_empty() {
            let axis = stack.pop().unwrap_or(0);
            let index = stack.pop().unwrap_or(0);
            let node = &self.nodes[index];

            if point_in_range(&node.point, low, high, K) {
                result.push(&node.point);
            }

            // Mirrors `insert`: anything not strictly below a node's key is stored to its right
            let next_axis = (axis + 1) % K;
            if let Some(right) = node.right {
                if high[axis].partial_cmp(&node.point[axis]) != Some(Ordering::Less) {
                    stack.push(right);
                    stack.push(next_axis);
                }
            }
            if let Some(left) = node.left {
                if low[axis] < node.point[axis] {
                    stack.push(left);
                    stack.push(next_axis);
                }
            }
        }

        Ok(result)
    }

    #[inline]
    fn root(&self) -> Option<usize> {
        (!self.nodes.is_empty()).then_some(0)
    }
}

impl<N: IndexableNum, const K: usize> Default for KDTree<N, K> {
    fn default() -> Self {
        Self::new()
    }
}
