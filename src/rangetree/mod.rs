//! An implementation of a static, multi-dimensional range tree.
//!
//! A [`RangeTree`] over points with `K` coordinates is a balanced binary search tree sorted by
//! one coordinate, in which every node owns an associated tree over its subtree's points sorted
//! by the next coordinate, down to the last one.

#![warn(missing_docs)]

mod builder;
mod index;
mod r#trait;
mod traversal;

pub use builder::RangeTreeBuilder;
pub use index::{RangeTree, RangeTree1D, RangeTreeMetadata};
pub use r#trait::RangeTreeIndex;
pub use traversal::Node;
