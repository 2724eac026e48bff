//! Comparison computation.
//!
//! [`compare_group`] works on parsed trees; [`compare_extracted`] on trees
//! already reduced to [`LeafPaths`].

use crate::compare::model::{AlternativeValue, ComparisonResult, GroupComparison, MissingKey};
use crate::model::{DocumentId, KeyPath, ParsedTree};
use crate::traversal::{extract_paths, ArrayPolicy, LeafPaths};
use indexmap::IndexSet;

/// Union of all members' leaf paths in first-seen order
///
/// A path's position is decided by the first member, in group order, whose
/// traversal yields it.
pub fn union_paths(members: &[(DocumentId, LeafPaths)]) -> IndexSet<&KeyPath> {
    members
        .iter()
        .flat_map(|(_, leaves)| leaves.paths())
        .collect()
}

/// Compare members already reduced to their leaf paths
///
/// The union is computed once; each member's missing paths are the union
/// minus its own set, in union order. Alternatives for a missing path come
/// from every other member holding it, in group order.
pub fn compare_extracted(members: &[(DocumentId, LeafPaths)]) -> GroupComparison {
    let union = union_paths(members);

    let results = members
        .iter()
        .enumerate()
        .map(|(position, (document, leaves))| {
            let missing = union
                .iter()
                .filter(|path| !leaves.contains(path))
                .map(|path| MissingKey {
                    path: (*path).clone(),
                    alternatives: alternatives(members, position, path),
                })
                .collect();
            ComparisonResult {
                document: document.clone(),
                missing,
            }
        })
        .collect();

    let comparison = GroupComparison {
        union_len: union.len(),
        results,
    };
    tracing::debug!(
        member_count = members.len(),
        union_len = comparison.union_len,
        incomplete_count = comparison.incomplete_count(),
        "compared group"
    );
    comparison
}

fn alternatives(
    members: &[(DocumentId, LeafPaths)],
    missing_from: usize,
    path: &KeyPath,
) -> Vec<AlternativeValue> {
    members
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != missing_from)
        .filter_map(|(_, (document, leaves))| {
            leaves.value_at(path).map(|value| AlternativeValue {
                document: document.clone(),
                value: value.clone(),
            })
        })
        .collect()
}

/// Compare parsed trees of one group
///
/// Each tree is reduced with [`extract_paths`] under `policy`, then compared
/// with [`compare_extracted`].
pub fn compare_group(
    members: &[(DocumentId, ParsedTree)],
    policy: ArrayPolicy,
) -> GroupComparison {
    let extracted: Vec<(DocumentId, LeafPaths)> = members
        .iter()
        .map(|(document, tree)| (document.clone(), extract_paths(tree, policy)))
        .collect();
    compare_extracted(&extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(name: &str, tree: ParsedTree) -> (DocumentId, ParsedTree) {
        (DocumentId::new(name), tree)
    }

    #[test]
    fn test_missing_paths_follow_union_order() {
        let members = vec![
            doc("a", json!({"x": 1})),
            doc("b", json!({"y": 1, "x": 1})),
            doc("c", json!({"z": 1})),
        ];
        let comparison = compare_group(&members, ArrayPolicy::Leaf);
        let missing: Vec<String> = comparison.results[2]
            .missing_paths()
            .map(|p| p.to_string())
            .collect();
        // x first (seen in a), then y (seen in b)
        assert_eq!(missing, vec!["x", "y"]);
        assert_eq!(comparison.union_len, 3);
    }

    #[test]
    fn test_alternatives_skip_members_also_missing() {
        let members = vec![
            doc("en", json!({"k": "hello"})),
            doc("fr", json!({})),
            doc("de", json!({})),
            doc("es", json!({"k": "hola"})),
        ];
        let comparison = compare_group(&members, ArrayPolicy::Leaf);
        let path = KeyPath::from_keys(["k"]);
        let alternatives = comparison.results[1].alternatives_for(&path).unwrap();
        let sources: Vec<&str> = alternatives.iter().map(|a| a.document.as_str()).collect();
        assert_eq!(sources, vec!["en", "es"]);
        assert_eq!(alternatives[1].value, json!("hola"));
    }

    #[test]
    fn test_value_differences_are_ignored() {
        let members = vec![doc("a", json!({"k": 1})), doc("b", json!({"k": "one"}))];
        let comparison = compare_group(&members, ArrayPolicy::Leaf);
        assert_eq!(comparison.incomplete_count(), 0);
    }

    #[test]
    fn test_leaf_versus_container_conflict() {
        // "a" is a leaf in one document and a mapping in the other
        let members = vec![doc("x", json!({"a": "text"})), doc("y", json!({"a": {"b": 1}}))];
        let comparison = compare_group(&members, ArrayPolicy::Leaf);
        assert_eq!(
            comparison.results[0].missing_paths().map(|p| p.to_string()).collect::<Vec<_>>(),
            vec!["a.b"]
        );
        assert_eq!(
            comparison.results[1].missing_paths().map(|p| p.to_string()).collect::<Vec<_>>(),
            vec!["a"]
        );
    }

    #[test]
    fn test_empty_group_has_no_results() {
        let comparison = compare_group(&[], ArrayPolicy::Leaf);
        assert_eq!(comparison.union_len, 0);
        assert!(comparison.results.is_empty());
    }
}
