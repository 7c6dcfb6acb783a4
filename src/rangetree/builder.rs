use crate::error::Result;
use crate::r#type::IndexableNum;
use crate::rangetree::RangeTree;

/// A builder to create a [`RangeTree`].
///
/// ```
/// use range_index::rangetree::{RangeTreeBuilder, RangeTreeIndex};
///
/// let mut builder = RangeTreeBuilder::<f64, 2>::new();
/// builder.add(&[0., 0.]);
/// builder.add(&[1., 1.]);
/// builder.add(&[2., 2.]);
/// let tree = builder.finish().unwrap();
///
/// let results = tree.range(&[0.5, 0.5], &[2., 2.]).unwrap();
/// assert_eq!(results.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RangeTreeBuilder<N: IndexableNum, const K: usize> {
    points: Vec<Vec<N>>,
    dim: usize,
}

impl<N: IndexableNum, const K: usize> RangeTreeBuilder<N, K> {
    /// Create a new, empty builder sorting its top level by the first coordinate.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new builder with room for `num_items` points.
    pub fn with_capacity(num_items: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_items),
            dim: 0,
        }
    }

    /// Set the coordinate index the top level of the tree is sorted by.
    pub fn dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Add a point to the index.
    ///
    /// This returns the insertion index. Points are validated in [`finish`][Self::finish].
    pub fn add(&mut self, point: &[N]) -> usize {
        let index = self.points.len();
        self.points.push(point.to_vec());
        index
    }

    /// Add every point of an iterator to the index.
    pub fn add_all<P: AsRef<[N]>>(&mut self, points: impl IntoIterator<Item = P>) {
        self.points
            .extend(points.into_iter().map(|p| p.as_ref().to_vec()));
    }

    /// The number of points added so far.
    pub fn num_items(&self) -> usize {
        self.points.len()
    }

    /// Consume this builder, validating the points and constructing the tree with all of its
    /// associated trees.
    ///
    /// Fails if any point has fewer than `K` coordinates or if the sort dimension is not below
    /// `K`.
    pub fn finish(self) -> Result<RangeTree<N, K>> {
        RangeTree::from_owned(self.points, self.dim)
    }
}

impl<N: IndexableNum, const K: usize> Default for RangeTreeBuilder<N, K> {
    fn default() -> Self {
        Self::new()
    }
}
