//! Report rendering
//!
//! Text output mirrors the established format of the tool: incomplete
//! documents and failures go to stderr, complete documents and the final
//! "No errors found" go to stdout.

use clap::ValueEnum;
use console::Style;
use keyparity_core::compare::ComparisonResult;
use keyparity_core::RunReport;
use serde_json::Value;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Styles for each kind of output line
#[derive(Debug, Clone)]
pub struct Theme {
    pub key: Style,
    pub text: Style,
    pub info: Style,
    pub warn: Style,
    pub error: Style,
}

impl Theme {
    /// Colors applied when the target stream is a terminal
    pub fn colored() -> Self {
        Self {
            key: Style::new().for_stderr().cyan(),
            text: Style::new().for_stderr().black().bright(),
            info: Style::new().green(),
            warn: Style::new().for_stderr().yellow(),
            error: Style::new().for_stderr().red(),
        }
    }

    /// No escape codes, even on a terminal
    pub fn plain() -> Self {
        let style = Style::new().force_styling(false);
        Self {
            key: style.clone(),
            text: style.clone(),
            info: style.clone(),
            warn: style.clone(),
            error: style,
        }
    }
}

/// Strings render unquoted, everything else as compact JSON
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a report in the requested format
///
/// # Errors
///
/// Returns an error if writing to either stream fails.
pub fn render<O: Write, E: Write>(
    report: &RunReport,
    format: Format,
    theme: &Theme,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match format {
        Format::Text => render_text(report, theme, out, err),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
    }
}

pub fn render_text<O: Write, E: Write>(
    report: &RunReport,
    theme: &Theme,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    for group in &report.groups {
        if let Some(failure) = group.failure() {
            writeln!(err, "{}", theme.error.apply_to(format!("Error: {}", failure.message)))?;
            continue;
        }
        for result in group.results() {
            if result.is_complete() {
                writeln!(
                    out,
                    "{}{}\n",
                    theme.info.clone().bold().apply_to(&result.document),
                    theme.info.apply_to(" is complete")
                )?;
            } else {
                render_incomplete(result, theme, err)?;
            }
        }
    }

    if report.is_success() {
        writeln!(out, "{}", theme.info.apply_to("No errors found\n"))?;
    }
    Ok(())
}

fn render_incomplete<E: Write>(
    result: &ComparisonResult,
    theme: &Theme,
    err: &mut E,
) -> io::Result<()> {
    writeln!(
        err,
        "{}{}",
        theme.warn.clone().bold().apply_to(&result.document),
        theme.warn.apply_to(" is missing the following keys:")
    )?;
    for missing in &result.missing {
        writeln!(err, "{}", theme.key.apply_to(&missing.path))?;
        for alternative in &missing.alternatives {
            writeln!(
                err,
                "{}",
                theme.text.apply_to(format!(
                    "  {}: {}",
                    alternative.document.label(),
                    render_value(&alternative.value)
                ))
            )?;
        }
    }
    writeln!(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyparity_core::compare::{AlternativeValue, MissingKey};
    use keyparity_core::report::GroupReport;
    use keyparity_core::{
        DocumentId, ExError, ExErrorKind, Group, GroupComparison, GroupKey, KeyPath,
    };
    use keyparity_core_types::RunId;
    use serde_json::json;

    fn render_plain(report: &RunReport) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        render_text(report, &Theme::plain(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn report_of(results: Vec<ComparisonResult>) -> RunReport {
        let members = results.iter().map(|r| r.document.clone()).collect();
        let group = Group::new(GroupKey::All, members);
        let comparison = GroupComparison {
            union_len: 2,
            results,
        };
        RunReport::new(RunId::new(), vec![GroupReport::compared(group, comparison)])
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("Hello")), "Hello");
        assert_eq!(render_value(&json!(3)), "3");
        assert_eq!(render_value(&json!([1, "a"])), r#"[1,"a"]"#);
        assert_eq!(render_value(&json!(null)), "null");
    }

    #[test]
    fn test_complete_run_text() {
        let report = report_of(vec![
            ComparisonResult {
                document: DocumentId::new("locales/en.json"),
                missing: vec![],
            },
            ComparisonResult {
                document: DocumentId::new("locales/fr.json"),
                missing: vec![],
            },
        ]);

        let (out, err) = render_plain(&report);

        assert_eq!(
            out,
            "locales/en.json is complete\n\nlocales/fr.json is complete\n\nNo errors found\n\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_incomplete_result_text() {
        let report = report_of(vec![
            ComparisonResult {
                document: DocumentId::new("locales/en.json"),
                missing: vec![],
            },
            ComparisonResult {
                document: DocumentId::new("locales/fr.json"),
                missing: vec![MissingKey {
                    path: KeyPath::from_keys(["greeting", "bye"]),
                    alternatives: vec![AlternativeValue {
                        document: DocumentId::new("locales/en.json"),
                        value: json!("Goodbye"),
                    }],
                }],
            },
        ]);

        let (out, err) = render_plain(&report);

        assert_eq!(out, "locales/en.json is complete\n\n");
        assert_eq!(
            err,
            "locales/fr.json is missing the following keys:\ngreeting.bye\n  en: Goodbye\n\n"
        );
    }

    #[test]
    fn test_failed_group_text() {
        let group = Group::new(GroupKey::All, vec![DocumentId::new("bad.json")]);
        let failure = ExError::new(ExErrorKind::DocumentParse)
            .with_document("bad.json")
            .with_message("EOF while parsing");
        let report = RunReport::new(RunId::new(), vec![GroupReport::failed(group, &failure)]);

        let (out, err) = render_plain(&report);

        assert!(out.is_empty());
        assert!(err.starts_with("Error: [ERR_DOCUMENT_PARSE]"));
        assert!(err.contains("bad.json"));
    }
}
