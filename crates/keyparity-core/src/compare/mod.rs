//! Group comparison engine.
//!
//! Computes, for every member of a group, the leaf paths present elsewhere in
//! the group but absent from it, and where else each one is defined.
//!
//! ## Entry points
//!
//! ```
//! use keyparity_core::compare::compare_group;
//! use keyparity_core::model::DocumentId;
//! use keyparity_core::traversal::ArrayPolicy;
//! use serde_json::json;
//!
//! let members = vec![
//!     (DocumentId::new("en.json"), json!({"a": 1, "b": {"c": 2}})),
//!     (DocumentId::new("fr.json"), json!({"a": 1})),
//! ];
//! let comparison = compare_group(&members, ArrayPolicy::Leaf);
//! assert!(comparison.results[0].is_complete());
//! assert_eq!(comparison.results[1].missing[0].path.to_string(), "b.c");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical results, including
//!   ordering. Paths follow first-seen order across members in group order.
//! - **Presence only**: values never influence the outcome; differing values
//!   at the same path are not reported.

pub mod engine;
pub mod model;

pub use engine::{compare_extracted, compare_group, union_paths};
pub use model::{AlternativeValue, ComparisonResult, GroupComparison, MissingKey};
