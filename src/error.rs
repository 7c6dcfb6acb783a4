use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeIndexError {
    /// A point or query bound does not carry the number of coordinates the tree requires.
    #[error("Dimension mismatch: expected {expected} coordinates, got {actual}.")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The requested sort dimension does not exist for a tree of this many dimensions.
    #[error("Invalid sort dimension {dim} for a {num_dims}-dimensional tree.")]
    InvalidDimension { dim: usize, num_dims: usize },

    /// The operation needs at least one point in the tree.
    #[error("Tree is empty.")]
    EmptyTree,
}

pub type Result<T> = std::result::Result<T, RangeIndexError>;
