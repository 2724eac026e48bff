//! Grouping computation.
//!
//! The core entry points are [`group_by`], which applies a compiled pattern,
//! and [`partition`], which resolves a [`GroupingConfig`] first.

use crate::errors::{KeyParityError, Result};
use crate::grouping::model::{Group, GroupKey, GroupingConfig, UnmatchedPolicy};
use crate::model::DocumentId;
use indexmap::{IndexMap, IndexSet};
use regex::Regex;

/// Translate a separator into a grouping pattern
///
/// The capture is greedy: it keeps everything before the last occurrence of
/// `separator` that is followed by at least two more characters with no `/`
/// among them. With `_`, `messages_fr.json` and `messages_de.json` both map
/// to `messages`. With `.` the extension dot is the last separator, so
/// `help.fr.json` maps to `help.fr`.
pub fn separator_pattern(separator: &str) -> String {
    format!(r"(.+){}.[^/]+.*", regex::escape(separator))
}

/// Compile a user-supplied pattern
///
/// `option` names the configuration option the pattern came from and is only
/// used in the error. When `require_capture` is set the pattern must define
/// at least one capture group.
///
/// # Errors
///
/// - `InvalidPattern` — the pattern does not compile, or lacks a required
///   capture group
pub fn compile_pattern(option: &str, pattern: &str, require_capture: bool) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| KeyParityError::InvalidPattern {
        option: option.to_string(),
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    // captures_len counts the implicit whole-match group
    if require_capture && regex.captures_len() < 2 {
        return Err(KeyParityError::InvalidPattern {
            option: option.to_string(),
            pattern: pattern.to_string(),
            reason: "pattern must contain at least one capture group".to_string(),
        });
    }

    Ok(regex)
}

/// Resolve the effective grouping pattern of a configuration
///
/// Returns `Ok(None)` when grouping is disabled.
///
/// # Errors
///
/// - `InvalidPattern` — invalid `group_by`, or an empty `separator`
pub fn resolve_pattern(config: &GroupingConfig) -> Result<Option<Regex>> {
    if let Some(pattern) = &config.group_by {
        return compile_pattern("group-by", pattern, true).map(Some);
    }
    match &config.separator {
        Some(separator) if separator.is_empty() => Err(KeyParityError::InvalidPattern {
            option: "separator".to_string(),
            pattern: String::new(),
            reason: "separator must not be empty".to_string(),
        }),
        Some(separator) => compile_pattern("separator", &separator_pattern(separator), true).map(Some),
        None => Ok(None),
    }
}

/// Group key of one document, if the pattern matches it
///
/// Unanchored search; the first capture group must have participated in the
/// match.
fn group_key_of(id: &DocumentId, pattern: &Regex) -> Option<String> {
    pattern
        .captures(id.name())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Drop repeated identifiers, keeping the first occurrence
fn unique(ids: &[DocumentId]) -> IndexSet<&DocumentId> {
    ids.iter().collect()
}

/// Partition documents by the first capture group of `pattern`
///
/// Groups appear in the order their key is first seen; members keep input
/// order. Under [`UnmatchedPolicy::Collect`] unmatched documents form one
/// [`GroupKey::Ungrouped`] group placed after every keyed group.
///
/// # Errors
///
/// - `UnmatchedDocument` — under [`UnmatchedPolicy::Error`], for the first
///   document the pattern does not match
pub fn group_by(
    ids: &[DocumentId],
    pattern: &Regex,
    unmatched_policy: UnmatchedPolicy,
) -> Result<Vec<Group>> {
    let mut keyed: IndexMap<String, Vec<DocumentId>> = IndexMap::new();
    let mut unmatched: Vec<DocumentId> = Vec::new();

    for id in unique(ids) {
        match group_key_of(id, pattern) {
            Some(key) => keyed.entry(key).or_default().push(id.clone()),
            None => match unmatched_policy {
                UnmatchedPolicy::Collect => unmatched.push(id.clone()),
                UnmatchedPolicy::Ignore => {
                    tracing::debug!(document_id = %id, "dropping unmatched document");
                }
                UnmatchedPolicy::Error => {
                    return Err(KeyParityError::UnmatchedDocument {
                        document_id: id.to_string(),
                        pattern: pattern.as_str().to_string(),
                    });
                }
            },
        }
    }

    let mut groups: Vec<Group> = keyed
        .into_iter()
        .map(|(key, members)| Group::new(GroupKey::Key(key), members))
        .collect();
    if !unmatched.is_empty() {
        groups.push(Group::new(GroupKey::Ungrouped, unmatched));
    }

    tracing::debug!(group_count = groups.len(), "grouped documents");
    Ok(groups)
}

/// Partition documents according to a grouping configuration
///
/// Without a pattern the whole input becomes one [`GroupKey::All`] group;
/// an empty input yields no groups at all.
///
/// # Errors
///
/// - `InvalidPattern` — see [`resolve_pattern`]
/// - `UnmatchedDocument` — see [`group_by`]
pub fn partition(ids: &[DocumentId], config: &GroupingConfig) -> Result<Vec<Group>> {
    match resolve_pattern(config)? {
        Some(pattern) => group_by(ids, &pattern, config.unmatched),
        None if ids.is_empty() => Ok(Vec::new()),
        None => Ok(vec![Group::new(
            GroupKey::All,
            unique(ids).into_iter().cloned().collect(),
        )]),
    }
}
