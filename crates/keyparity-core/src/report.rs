//! Result records handed to the reporting layer.
//!
//! A [`RunReport`] is the complete outcome of one check invocation: one
//! [`GroupReport`] per group, in grouping order. Rendering (colors, exit
//! codes) happens elsewhere; these types only carry data.

use crate::compare::{ComparisonResult, GroupComparison};
use crate::errors::ExError;
use crate::grouping::{Group, GroupKey};
use crate::model::DocumentId;
use keyparity_core_types::RunId;
use serde::Serialize;

/// Why a group could not be compared
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupFailure {
    /// Document that failed to load, if the failure is tied to one
    pub document: Option<DocumentId>,
    pub code: String,
    pub message: String,
}

impl From<&ExError> for GroupFailure {
    fn from(err: &ExError) -> Self {
        Self {
            document: err.document_id().map(DocumentId::new),
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Outcome of one group
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupOutcome {
    Compared {
        union_len: usize,
        /// Results left after suppression, in group order
        results: Vec<ComparisonResult>,
        /// Number of results removed by the suppression pattern
        suppressed: usize,
    },
    Failed(GroupFailure),
}

/// One group and its outcome
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupReport {
    pub key: GroupKey,
    pub members: Vec<DocumentId>,
    pub outcome: GroupOutcome,
}

impl GroupReport {
    /// Report for a compared group, before any suppression
    pub fn compared(group: Group, comparison: GroupComparison) -> Self {
        Self {
            key: group.key,
            members: group.members,
            outcome: GroupOutcome::Compared {
                union_len: comparison.union_len,
                results: comparison.results,
                suppressed: 0,
            },
        }
    }

    pub fn failed(group: Group, err: &ExError) -> Self {
        Self {
            key: group.key,
            members: group.members,
            outcome: GroupOutcome::Failed(GroupFailure::from(err)),
        }
    }

    /// Surfaced results; empty for a failed group
    pub fn results(&self) -> &[ComparisonResult] {
        match &self.outcome {
            GroupOutcome::Compared { results, .. } => results,
            GroupOutcome::Failed(_) => &[],
        }
    }

    pub fn failure(&self) -> Option<&GroupFailure> {
        match &self.outcome {
            GroupOutcome::Failed(failure) => Some(failure),
            GroupOutcome::Compared { .. } => None,
        }
    }

    /// Remove results whose document matches `predicate`
    pub fn suppress<F>(&mut self, predicate: F)
    where
        F: Fn(&DocumentId) -> bool,
    {
        if let GroupOutcome::Compared {
            results,
            suppressed,
            ..
        } = &mut self.outcome
        {
            let before = results.len();
            results.retain(|r| !predicate(&r.document));
            *suppressed += before - results.len();
        }
    }

    /// True if the group was compared and every surfaced result is complete
    pub fn is_success(&self) -> bool {
        match &self.outcome {
            GroupOutcome::Compared { results, .. } => results.iter().all(|r| r.is_complete()),
            GroupOutcome::Failed(_) => false,
        }
    }
}

/// Complete outcome of one check invocation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunReport {
    /// Log correlation only; not part of the serialized report
    #[serde(skip)]
    pub run_id: RunId,
    pub groups: Vec<GroupReport>,
}

impl RunReport {
    pub fn new(run_id: RunId, groups: Vec<GroupReport>) -> Self {
        Self { run_id, groups }
    }

    /// A run succeeds when no surfaced result is incomplete and no group failed
    ///
    /// A run over zero documents succeeds.
    pub fn is_success(&self) -> bool {
        self.groups.iter().all(GroupReport::is_success)
    }

    /// Surfaced results of every group, in report order
    pub fn results(&self) -> impl Iterator<Item = &ComparisonResult> {
        self.groups.iter().flat_map(|g| g.results().iter())
    }

    pub fn failures(&self) -> impl Iterator<Item = &GroupFailure> {
        self.groups.iter().filter_map(GroupReport::failure)
    }

    pub fn incomplete_count(&self) -> usize {
        self.results().filter(|r| !r.is_complete()).count()
    }

    pub fn document_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::MissingKey;
    use crate::errors::ExErrorKind;
    use crate::model::KeyPath;

    fn result(name: &str, missing: &[&str]) -> ComparisonResult {
        ComparisonResult {
            document: DocumentId::new(name),
            missing: missing
                .iter()
                .map(|p| MissingKey {
                    path: KeyPath::from_keys([*p]),
                    alternatives: Vec::new(),
                })
                .collect(),
        }
    }

    fn compared(results: Vec<ComparisonResult>) -> GroupReport {
        let members = results.iter().map(|r| r.document.clone()).collect();
        GroupReport::compared(
            Group::new(GroupKey::All, members),
            GroupComparison {
                union_len: 1,
                results,
            },
        )
    }

    #[test]
    fn test_empty_run_succeeds() {
        let report = RunReport::new(RunId::new(), Vec::new());
        assert!(report.is_success());
        assert_eq!(report.document_count(), 0);
    }

    #[test]
    fn test_suppression_hides_incomplete_results() {
        let mut group = compared(vec![result("en.json", &[]), result("xx.json", &["k"])]);
        assert!(!group.is_success());

        group.suppress(|id| id.as_str().starts_with("xx"));

        assert!(group.is_success());
        assert_eq!(group.results().len(), 1);
        match &group.outcome {
            GroupOutcome::Compared { suppressed, .. } => assert_eq!(*suppressed, 1),
            GroupOutcome::Failed(_) => panic!("expected compared outcome"),
        }
    }

    #[test]
    fn test_suppression_never_hides_failures() {
        let err = ExError::new(ExErrorKind::DocumentParse).with_document("fr.json");
        let mut group = GroupReport::failed(
            Group::new(GroupKey::All, vec![DocumentId::new("fr.json")]),
            &err,
        );
        group.suppress(|_| true);

        let report = RunReport::new(RunId::new(), vec![group]);
        assert!(!report.is_success());
        let failure = report.failures().next().unwrap();
        assert_eq!(failure.code, "ERR_DOCUMENT_PARSE");
        assert_eq!(failure.document, Some(DocumentId::new("fr.json")));
    }

    #[test]
    fn test_serialized_report_omits_run_id() {
        let first = RunReport::new(RunId::new(), vec![compared(vec![result("a.json", &[])])]);
        let second = RunReport::new(RunId::new(), first.groups.clone());

        let json = serde_json::to_value(&first).unwrap();

        assert!(json.get("run_id").is_none());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
