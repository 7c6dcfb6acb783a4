#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
pub mod rangetree;
mod r#type;
mod util;

pub use error::RangeIndexError;
pub use r#type::IndexableNum;

#[cfg(test)]
pub(crate) mod test;
