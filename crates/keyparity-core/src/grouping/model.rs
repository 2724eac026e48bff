//! Grouping configuration and output types.

use crate::model::DocumentId;
use serde::{Deserialize, Serialize};

/// What to do with documents the grouping pattern does not match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
    /// Compare all unmatched documents with each other in one extra group
    #[default]
    Collect,
    /// Drop unmatched documents from the run
    Ignore,
    /// Reject the run with an `UnmatchedDocument` error
    Error,
}

/// Grouping options as supplied by the caller
///
/// `group_by` takes precedence over `separator`. With neither set, every
/// document lands in a single implicit group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Shorthand: group by everything before the last occurrence of this string
    pub separator: Option<String>,
    /// Explicit regular expression; the first capture group is the group key
    pub group_by: Option<String>,
    pub unmatched: UnmatchedPolicy,
}

impl GroupingConfig {
    /// Group by an explicit pattern
    pub fn by_pattern(pattern: impl Into<String>) -> Self {
        Self {
            group_by: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Group by a separator shorthand
    pub fn by_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: Some(separator.into()),
            ..Self::default()
        }
    }

    pub fn with_unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    /// True when any grouping pattern is configured
    pub fn is_enabled(&self) -> bool {
        self.group_by.is_some() || self.separator.is_some()
    }
}

/// Identity of a group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GroupKey {
    /// No grouping configured; the whole input is one group
    All,
    /// Value of the first capture group
    Key(String),
    /// Documents the pattern did not match
    Ungrouped,
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::All => f.write_str("*"),
            GroupKey::Key(key) => f.write_str(key),
            GroupKey::Ungrouped => f.write_str("(ungrouped)"),
        }
    }
}

/// Documents compared only against each other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub key: GroupKey,
    /// Members in input order
    pub members: Vec<DocumentId>,
}

impl Group {
    pub fn new(key: GroupKey, members: Vec<DocumentId>) -> Self {
        Self { key, members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
