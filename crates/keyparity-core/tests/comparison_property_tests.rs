#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Property tests for the comparison engine.

mod common;

use common::{arb_document, arb_group};
use keyparity_core::compare::compare_group;
use keyparity_core::{extract_paths, ArrayPolicy, DocumentId, KeyPath};
use proptest::prelude::*;
use std::collections::HashSet;

fn policies() -> impl Strategy<Value = ArrayPolicy> {
    prop_oneof![Just(ArrayPolicy::Leaf), Just(ArrayPolicy::Index)]
}

proptest! {
    #[test]
    fn single_document_is_complete(doc in arb_document(), policy in policies()) {
        let group = vec![(DocumentId::new("only"), doc)];
        let comparison = compare_group(&group, policy);
        prop_assert!(comparison.results[0].is_complete());
    }

    #[test]
    fn identical_documents_are_all_complete(doc in arb_document(), copies in 1usize..5) {
        let group: Vec<_> = (0..copies)
            .map(|i| (DocumentId::new(format!("d{}", i)), doc.clone()))
            .collect();
        let comparison = compare_group(&group, ArrayPolicy::Index);
        prop_assert_eq!(comparison.incomplete_count(), 0);
    }

    #[test]
    fn comparison_is_idempotent(group in arb_group(), policy in policies()) {
        let first = compare_group(&group, policy);
        let second = compare_group(&group, policy);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn missing_is_union_minus_own(group in arb_group(), policy in policies()) {
        let extracted: Vec<_> = group
            .iter()
            .map(|(_, tree)| extract_paths(tree, policy))
            .collect();
        let union: HashSet<&KeyPath> = extracted.iter().flat_map(|l| l.paths()).collect();
        let comparison = compare_group(&group, policy);

        for (result, own) in comparison.results.iter().zip(&extracted) {
            let missing: HashSet<&KeyPath> = result.missing_paths().collect();
            let expected: HashSet<&KeyPath> =
                union.iter().copied().filter(|p| !own.contains(p)).collect();
            prop_assert_eq!(missing, expected);
            prop_assert_eq!(result.is_complete(), own.len() == union.len());
        }
    }

    #[test]
    fn alternatives_only_from_other_holders(group in arb_group(), policy in policies()) {
        let extracted: Vec<_> = group
            .iter()
            .map(|(id, tree)| (id.clone(), extract_paths(tree, policy)))
            .collect();
        let comparison = compare_group(&group, policy);

        for result in &comparison.results {
            for missing in &result.missing {
                prop_assert!(!missing.alternatives.is_empty());
                for alternative in &missing.alternatives {
                    prop_assert_ne!(&alternative.document, &result.document);
                    let (_, leaves) = extracted
                        .iter()
                        .find(|(id, _)| id == &alternative.document)
                        .unwrap();
                    prop_assert_eq!(leaves.value_at(&missing.path), Some(&alternative.value));
                }
            }
        }
    }

    #[test]
    fn union_size_is_bounded(group in arb_group(), policy in policies()) {
        let counts: Vec<usize> = group
            .iter()
            .map(|(_, tree)| extract_paths(tree, policy).len())
            .collect();
        let comparison = compare_group(&group, policy);

        let largest = counts.iter().copied().max().unwrap_or(0);
        let total: usize = counts.iter().sum();
        prop_assert!(comparison.union_len >= largest);
        prop_assert!(comparison.union_len <= total);
    }

    #[test]
    fn extracted_paths_are_never_prefixes(doc in arb_document(), policy in policies()) {
        let leaves = extract_paths(&doc, policy);
        let paths: Vec<&KeyPath> = leaves.paths().collect();
        for a in &paths {
            for b in &paths {
                prop_assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
            }
        }
    }
}
