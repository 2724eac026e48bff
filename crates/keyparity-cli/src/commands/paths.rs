//! Paths command
//!
//! Usage: keyparity paths <FILE> [--arrays leaf|index]

use super::check::{array_policy, ArraysArg};
use crate::report::render_value;
use clap::Args;
use keyparity_core::{extract_paths, DocumentId, DocumentLoader};
use keyparity_engine::JsonFileLoader;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PathsArgs {
    /// JSON file to inspect
    pub file: PathBuf,

    /// How arrays contribute key paths
    #[arg(long, value_enum, default_value_t)]
    pub arrays: ArraysArg,
}

/// Execute paths command
///
/// Prints one `<path>: <value>` line per leaf, in document order.
pub fn execute(args: PathsArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let id = DocumentId::from(args.file.as_path());
    let tree = JsonFileLoader::new().load(&id)?;
    let leaves = extract_paths(&tree, array_policy(args.arrays));

    let mut out = io::stdout().lock();
    for (path, value) in leaves.iter() {
        writeln!(out, "{}: {}", path, render_value(value))?;
    }
    Ok(0)
}
