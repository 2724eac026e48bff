//! Check command with boundary logging.
//!
//! A check run validates its configuration, partitions the documents into
//! groups, then loads and compares one group at a time. Every member of a
//! group is loaded before the group is compared; the first load failure
//! abandons the group.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for checks:
//! - `check_run` once per invocation, carrying the run id
//! - `check_group` once per group
//!
//! Core uses only `tracing::debug!()` for internal details.

use crate::errors::{configuration_error, load_error, Result};
use keyparity_core::grouping::compile_pattern;
use keyparity_core::{
    compare_group, partition, ArrayPolicy, DocumentId, DocumentLoader, Group, GroupComparison,
    GroupReport, GroupingConfig, ParsedTree, RunReport,
};
use keyparity_core::{log_op_end, log_op_error, log_op_start};
use keyparity_core_types::RunId;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// What happens to the rest of the run when a group fails to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Report the group as failed and keep checking the other groups
    #[default]
    Isolate,
    /// Stop the run and return the load error
    AbortAll,
}

/// Configuration of one check run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    pub grouping: GroupingConfig,
    /// Results for documents matching this pattern are dropped from the report
    pub suppress_errors: Option<String>,
    pub array_policy: ArrayPolicy,
    pub failure_policy: FailurePolicy,
}

impl CheckOptions {
    /// Compile the suppression pattern, if any
    ///
    /// # Errors
    ///
    /// - `InvalidPattern` — the pattern does not compile
    pub fn suppression(&self) -> Result<Option<Regex>> {
        self.suppress_errors
            .as_deref()
            .map(|p| compile_pattern("suppress-errors", p, false))
            .transpose()
            .map_err(|e| configuration_error("check_run", e))
    }
}

/// Check a set of documents for key parity
///
/// ## Returns
///
/// A [`RunReport`] with one entry per group, in grouping order. Zero
/// documents produce an empty, successful report.
///
/// ## Errors
///
/// - `InvalidPattern`: grouping or suppression pattern rejected (before any load)
/// - `UnmatchedDocument`: unmatched document under `UnmatchedPolicy::Error`
/// - `DocumentRead` / `DocumentParse`: only under [`FailurePolicy::AbortAll`]
pub fn run_check(
    documents: &[DocumentId],
    options: &CheckOptions,
    loader: &dyn DocumentLoader,
) -> Result<RunReport> {
    let run_id = RunId::new();
    log_op_start!(
        "check_run",
        run_id = run_id.as_str(),
        document_count = documents.len() as u64
    );
    let start = std::time::Instant::now();

    let report = run_check_impl(run_id.clone(), documents, options, loader).map_err(|e| {
        log_op_error!(
            "check_run",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "check_run",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        group_count = report.groups.len() as u64,
        incomplete_count = report.incomplete_count() as u64
    );

    Ok(report)
}

fn run_check_impl(
    run_id: RunId,
    documents: &[DocumentId],
    options: &CheckOptions,
    loader: &dyn DocumentLoader,
) -> Result<RunReport> {
    // Configuration must be rejected before the first load
    let suppression = options.suppression()?;
    let groups = partition(documents, &options.grouping)
        .map_err(|e| configuration_error("partition", e))?;

    let mut reports = Vec::with_capacity(groups.len());
    for group in groups {
        let mut report = match check_group(&run_id, &group, options.array_policy, loader) {
            Ok(comparison) => GroupReport::compared(group, comparison),
            Err(err) if options.failure_policy == FailurePolicy::Isolate => {
                tracing::warn!(group_key = %group.key, error = %err, "group skipped");
                GroupReport::failed(group, &err)
            }
            Err(err) => return Err(err),
        };
        if let Some(pattern) = &suppression {
            report.suppress(|id| pattern.is_match(id.name()));
        }
        reports.push(report);
    }

    Ok(RunReport::new(run_id, reports))
}

/// Load and compare one group
///
/// ## Errors
///
/// - `DocumentRead` / `DocumentParse`: the first member that failed to load
pub fn check_group(
    run_id: &RunId,
    group: &Group,
    array_policy: ArrayPolicy,
    loader: &dyn DocumentLoader,
) -> Result<GroupComparison> {
    let group_key = group.key.to_string();
    log_op_start!(
        "check_group",
        run_id = run_id.as_str(),
        group_key = group_key.as_str(),
        document_count = group.len() as u64
    );
    let start = std::time::Instant::now();

    let comparison = load_members(group, loader)
        .map(|members| compare_group(&members, array_policy))
        .map_err(|e| {
            log_op_error!(
                "check_group",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = run_id.as_str(),
                group_key = group_key.as_str()
            );
            e
        })?;

    log_op_end!(
        "check_group",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        group_key = group_key.as_str(),
        union_len = comparison.union_len as u64,
        incomplete_count = comparison.incomplete_count() as u64
    );

    Ok(comparison)
}

/// Load every member, stopping at the first failure
fn load_members(
    group: &Group,
    loader: &dyn DocumentLoader,
) -> Result<Vec<(DocumentId, ParsedTree)>> {
    group
        .members
        .iter()
        .map(|id| {
            loader
                .load(id)
                .map(|tree| (id.clone(), tree))
                .map_err(load_error)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CheckOptions::default();
        assert!(!options.grouping.is_enabled());
        assert_eq!(options.array_policy, ArrayPolicy::Leaf);
        assert_eq!(options.failure_policy, FailurePolicy::Isolate);
        assert!(options.suppression().unwrap().is_none());
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: CheckOptions = serde_json::from_str(
            r#"{"grouping": {"separator": "."}, "failure_policy": "abort_all"}"#,
        )
        .unwrap();
        assert_eq!(options.grouping.separator.as_deref(), Some("."));
        assert_eq!(options.failure_policy, FailurePolicy::AbortAll);
        assert!(options.suppress_errors.is_none());
    }

    #[test]
    fn test_invalid_suppression_is_configuration_error() {
        let options = CheckOptions {
            suppress_errors: Some("(".to_string()),
            ..CheckOptions::default()
        };
        let err = options.suppression().unwrap_err();
        assert!(err.kind().is_configuration());
    }
}
