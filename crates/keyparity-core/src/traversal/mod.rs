//! Leaf-path extraction.
//!
//! Reduces a [`ParsedTree`](crate::model::ParsedTree) to the ordered set of
//! paths that reach its leaves, plus the value held at each one. This is the
//! only view of a document the comparator ever sees.

pub mod leaf_paths;

pub use leaf_paths::{extract_paths, ArrayPolicy, LeafPaths};
