//! Check command
//!
//! Usage: keyparity check [FILES]... [--separator <SEP> | --group-by <REGEX>]

use crate::report::{self, Format, Theme};
use clap::{Args, ValueEnum};
use keyparity_core::{ArrayPolicy, DocumentId, GroupingConfig, RunReport, UnmatchedPolicy};
use keyparity_engine::{run_check, CheckOptions, FailurePolicy, JsonFileLoader};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnmatchedArg {
    /// Compare unmatched files with each other
    #[default]
    Collect,
    /// Fail the run when a file matches no group
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ArraysArg {
    /// A whole array is one value
    #[default]
    Leaf,
    /// Array elements are addressed by index
    Index,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON files to compare
    pub files: Vec<PathBuf>,

    /// Group files by the part of their name before this separator
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Group files by the first capture group of this regex (overrides --separator)
    #[arg(short = 'g', long, value_name = "REGEX")]
    pub group_by: Option<String>,

    /// Skip files that belong to no group
    #[arg(long)]
    pub ignore_ungrouped: bool,

    /// How to treat files that belong to no group
    #[arg(long, value_enum, default_value_t)]
    pub unmatched: UnmatchedArg,

    /// Do not report files whose name matches this regex
    #[arg(long, value_name = "REGEX")]
    pub suppress_errors: Option<String>,

    /// How arrays contribute key paths
    #[arg(long, value_enum, default_value_t)]
    pub arrays: ArraysArg,

    /// Stop at the first file that cannot be read or parsed
    #[arg(long)]
    pub abort_on_error: bool,

    /// Exit with status 1 when any key is missing
    #[arg(short, long)]
    pub exit: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CheckArgs {
    fn options(&self) -> CheckOptions {
        // --ignore-ungrouped wins over --unmatched
        let unmatched = if self.ignore_ungrouped {
            UnmatchedPolicy::Ignore
        } else {
            match self.unmatched {
                UnmatchedArg::Collect => UnmatchedPolicy::Collect,
                UnmatchedArg::Error => UnmatchedPolicy::Error,
            }
        };

        CheckOptions {
            grouping: GroupingConfig {
                separator: self.separator.clone(),
                group_by: self.group_by.clone(),
                unmatched,
            },
            suppress_errors: self.suppress_errors.clone(),
            array_policy: array_policy(self.arrays),
            failure_policy: if self.abort_on_error {
                FailurePolicy::AbortAll
            } else {
                FailurePolicy::Isolate
            },
        }
    }
}

pub fn array_policy(arg: ArraysArg) -> ArrayPolicy {
    match arg {
        ArraysArg::Leaf => ArrayPolicy::Leaf,
        ArraysArg::Index => ArrayPolicy::Index,
    }
}

/// Execute check command
///
/// Returns the process exit code. A group that could not be loaded always
/// exits 1; missing keys exit 1 only when `--exit` is given.
pub fn execute(args: CheckArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let options = args.options();
    let documents: Vec<DocumentId> = args
        .files
        .iter()
        .map(|path| DocumentId::from(path.as_path()))
        .collect();

    let report = run_check(&documents, &options, &JsonFileLoader::new())?;

    let theme = if args.no_color {
        Theme::plain()
    } else {
        Theme::colored()
    };
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    report::render(&report, args.format, &theme, &mut out, &mut err)?;

    Ok(exit_code(&report, args.exit))
}

fn exit_code(report: &RunReport, exit_on_missing: bool) -> i32 {
    if report.failures().next().is_some() || (exit_on_missing && !report.is_success()) {
        1
    } else {
        0
    }
}
