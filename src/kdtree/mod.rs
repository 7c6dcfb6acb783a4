//! An implementation of a growable, K-dimensional K-D Tree.

#![warn(missing_docs)]

mod index;

pub use index::KDTree;
