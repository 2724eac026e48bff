//! Comparison output types.
//!
//! All collections are `Vec`s in a defined order so serialized output is
//! reproducible.

use crate::model::{DocumentId, KeyPath};
use serde::Serialize;
use serde_json::Value;

/// The value another document holds at a path the current one lacks
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlternativeValue {
    pub document: DocumentId,
    pub value: Value,
}

/// One path missing from a document
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MissingKey {
    pub path: KeyPath,
    /// Every other member holding `path`, in group order
    pub alternatives: Vec<AlternativeValue>,
}

/// Outcome for one document of a group
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonResult {
    pub document: DocumentId,
    /// Missing paths in group-union order; empty when complete
    pub missing: Vec<MissingKey>,
}

impl ComparisonResult {
    /// A complete document defines every path of its group
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_paths(&self) -> impl Iterator<Item = &KeyPath> {
        self.missing.iter().map(|m| &m.path)
    }

    /// Alternatives for one missing path; `None` if the path is not missing
    pub fn alternatives_for(&self, path: &KeyPath) -> Option<&[AlternativeValue]> {
        self.missing
            .iter()
            .find(|m| &m.path == path)
            .map(|m| m.alternatives.as_slice())
    }
}

/// Results for one group
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupComparison {
    /// Number of distinct leaf paths across the group
    pub union_len: usize,
    /// One result per member, in group order
    pub results: Vec<ComparisonResult>,
}

impl GroupComparison {
    pub fn incomplete_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_complete()).count()
    }
}
