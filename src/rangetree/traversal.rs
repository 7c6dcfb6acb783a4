//! Utilities to traverse the RangeTree structure.

use crate::r#type::IndexableNum;
use crate::rangetree::RangeTree;

/// A node in one level of a [`RangeTree`].
///
/// Nodes are read-only views; they borrow the tree and never own data of their own.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a, N: IndexableNum, const K: usize> {
    /// The tree level that this node is a reference onto
    tree: &'a RangeTree<N, K>,

    /// Start of this node's canonical subset in the level's sorted points (inclusive)
    begin: usize,

    /// End of this node's canonical subset in the level's sorted points (exclusive)
    end: usize,
}

impl<'a, N: IndexableNum, const K: usize> Node<'a, N, K> {
    pub(crate) fn from_root(tree: &'a RangeTree<N, K>) -> Option<Self> {
        Self::new(tree, 0, tree.points.len())
    }

    #[inline]
    pub(crate) fn new(tree: &'a RangeTree<N, K>, begin: usize, end: usize) -> Option<Self> {
        (begin < end).then_some(Self { tree, begin, end })
    }

    /// Position of this node's point in the level's sorted points.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.begin + (self.end - self.begin) / 2
    }

    /// The coordinate index this node's level is sorted by.
    #[inline]
    pub fn dim(&self) -> usize {
        self.tree.metadata.dim()
    }

    /// The point held by this node.
    #[inline]
    pub fn point(&self) -> &'a [N] {
        &self.tree.points[self.position()]
    }

    /// This node's key, i.e. its point's coordinate in the level's sort dimension.
    #[inline]
    pub fn key(&self) -> N {
        self.point()[self.dim()]
    }

    /// The left subtree, holding points ordered before this node's point.
    pub fn left_child(&self) -> Option<Node<'a, N, K>> {
        Self::new(self.tree, self.begin, self.position())
    }

    /// The right subtree, holding points ordered after this node's point.
    pub fn right_child(&self) -> Option<Node<'a, N, K>> {
        Self::new(self.tree, self.position() + 1, self.end)
    }

    /// Every point in this node's subtree, including its own, sorted by the level's dimension.
    pub fn canonical_subset(&self) -> &'a [Vec<N>] {
        &self.tree.points[self.begin..self.end]
    }

    /// Append this node's canonical subset to `result`.
    pub fn collect_points(&self, result: &mut Vec<&'a [N]>) {
        result.extend(self.canonical_subset().iter().map(Vec::as_slice));
    }

    /// The tree over this node's canonical subset sorted by the next dimension.
    ///
    /// Returns `None` for nodes in the last dimension.
    pub fn associated_tree(&self) -> Option<&'a RangeTree<N, K>> {
        self.tree.associated.get(self.position())
    }

    /// The number of points in this node's subtree.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.end - self.begin
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.num_items() == 1
    }

    /// Height of the subtree rooted at this node.
    pub fn height(&self) -> usize {
        (usize::BITS - self.num_items().leading_zeros()) as usize
    }
}
