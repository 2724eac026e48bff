//! keyparity Core - key-path consistency checking for structured documents
//!
//! This crate provides the pure comparison engine:
//! - Leaf-path extraction from parsed trees
//! - Pattern-based grouping of documents
//! - Per-group comparison with alternative values for missing keys
//! - Report model handed to renderers
//! - Error and logging facilities shared by the other crates
//!
//! No I/O happens here; documents arrive through the [`DocumentLoader`] seam.

pub mod compare;
pub mod errors;
pub mod grouping;
pub mod loader;
pub mod logging_facility;
pub mod model;
pub mod report;
pub mod traversal;

// Re-export commonly used types
pub use compare::{compare_group, ComparisonResult, GroupComparison};
pub use errors::{ExError, ExErrorKind, KeyParityError, Result};
pub use grouping::{group_by, partition, Group, GroupKey, GroupingConfig, UnmatchedPolicy};
pub use loader::DocumentLoader;
pub use model::{DocumentId, KeyPath, ParsedTree, Segment};
pub use report::{GroupOutcome, GroupReport, RunReport};
pub use traversal::{extract_paths, ArrayPolicy, LeafPaths};
