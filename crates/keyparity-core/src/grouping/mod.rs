//! Partitioning of input documents into independently compared groups.
//!
//! A group is selected by the first capture group of a regular expression
//! matched against each document's name. Documents the pattern does not
//! match are handled per [`UnmatchedPolicy`].

pub mod engine;
pub mod model;

pub use engine::{compile_pattern, group_by, partition, resolve_pattern, separator_pattern};
pub use model::{Group, GroupKey, GroupingConfig, UnmatchedPolicy};
