#[cfg(feature = "tracing")]
use tracing::{event, span, Level};

use crate::error::{RangeIndexError, Result};
use crate::r#type::IndexableNum;
#[cfg(feature = "tracing")]
use crate::rangetree::RangeTreeIndex;
use crate::util::{check_min_dims, cmp_coord};

/// Metadata describing one level of a [`RangeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeTreeMetadata {
    num_items: usize,
    dim: usize,
    num_dims: usize,
}

impl RangeTreeMetadata {
    pub(crate) fn new(num_items: usize, dim: usize, num_dims: usize) -> Self {
        Self {
            num_items,
            dim,
            num_dims,
        }
    }

    /// The number of points stored at this level.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// The coordinate index this level is sorted by.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The number of coordinates considered by every predicate of the tree (`K`).
    pub fn num_dims(&self) -> usize {
        self.num_dims
    }

    /// Height of the balanced BST at this level, i.e. `ceil(log2(num_items + 1))`.
    pub fn height(&self) -> usize {
        (usize::BITS - self.num_items.leading_zeros()) as usize
    }
}

/// A static range tree over points with `K` coordinates.
///
/// Each level is a perfectly balanced binary search tree laid out implicitly over a sorted array:
/// the node covering `points[begin..end]` holds `points[begin + (end - begin) / 2]`, its left
/// subtree covers `[begin, mid)` and its right subtree `(mid, end)`. That slice is also the node's
/// canonical subset. Unless this is the last dimension, every node owns an associated tree one
/// dimension narrower, built over its canonical subset and stored at the node's position in
/// `associated`.
///
/// The tree is built once and is read-only afterwards. Use
/// [`RangeTreeIndex`][crate::rangetree::RangeTreeIndex] to query it.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTree<N: IndexableNum, const K: usize> {
    /// Points sorted by coordinate `metadata.dim()`
    pub(crate) points: Vec<Vec<N>>,
    /// Associated trees by node position. Empty at the last dimension.
    pub(crate) associated: Vec<RangeTree<N, K>>,
    pub(crate) metadata: RangeTreeMetadata,
}

/// A one-dimensional range tree, the base case of the nested structure.
pub type RangeTree1D<N> = RangeTree<N, 1>;

impl<N: IndexableNum, const K: usize> RangeTree<N, K> {
    /// Build a tree sorted by the first coordinate.
    ///
    /// Every point must have at least `K` coordinates; any extra coordinates are kept in the
    /// stored points but ignored by all predicates. An empty input yields an empty tree.
    ///
    /// ```
    /// use range_index::rangetree::{RangeTree, RangeTreeIndex};
    ///
    /// let tree = RangeTree::<i32, 2>::try_new(&[[3, 6], [17, 15], [13, 15]]).unwrap();
    /// assert!(tree.contains(&[13, 15]).unwrap());
    /// ```
    pub fn try_new<P: AsRef<[N]>>(points: &[P]) -> Result<Self> {
        Self::try_new_with_dim(points, 0)
    }

    /// Build a tree whose own level is sorted by coordinate `dim`.
    ///
    /// Associated trees are built down to coordinate `K - 1`.
    pub fn try_new_with_dim<P: AsRef<[N]>>(points: &[P], dim: usize) -> Result<Self> {
        let points = points.iter().map(|p| p.as_ref().to_vec()).collect();
        Self::from_owned(points, dim)
    }

    pub(crate) fn from_owned(points: Vec<Vec<N>>, dim: usize) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let span = span!(Level::DEBUG, "build_range_tree", num_items = points.len(), dim);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if dim >= K {
            return Err(RangeIndexError::InvalidDimension { dim, num_dims: K });
        }
        for point in points.iter() {
            check_min_dims(point, K)?;
        }

        let tree = Self::from_validated(points, dim);

        #[cfg(feature = "tracing")]
        event!(
            Level::DEBUG,
            height = tree.height(),
            stored_points = tree.stored_points(),
            "range tree built"
        );

        Ok(tree)
    }

    /// Build from points already known to have at least `K` coordinates, with `dim < K`.
    fn from_validated(mut points: Vec<Vec<N>>, dim: usize) -> Self {
        #[cfg(feature = "tracing")]
        let span = span!(Level::TRACE, "build_level", num_items = points.len(), dim);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        // stable, so equal keys keep their input order
        points.sort_by(|a, b| cmp_coord(a[dim], b[dim]));

        let mut associated = Vec::new();
        if dim + 1 < K {
            associated.reserve_exact(points.len());
            build_associated(&points, dim + 1, &mut associated);
        }

        Self {
            metadata: RangeTreeMetadata::new(points.len(), dim, K),
            points,
            associated,
        }
    }
}

/// Build the associated trees of every node covering `sorted`, pushing them in node position
/// order.
///
/// An in-order walk of the implicit BST visits node positions in increasing order, so the tree
/// for the node at position `i` ends up at `out[i]`.
fn build_associated<N: IndexableNum, const K: usize>(
    sorted: &[Vec<N>],
    dim: usize,
    out: &mut Vec<RangeTree<N, K>>,
) {
    if sorted.is_empty() {
        return;
    }

    let mid = sorted.len() / 2;
    build_associated(&sorted[..mid], dim, out);
    out.push(RangeTree::from_validated(sorted.to_vec(), dim));
    build_associated(&sorted[mid + 1..], dim, out);
}
