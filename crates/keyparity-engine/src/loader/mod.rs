//! Document loaders.
//!
//! - [`JsonFileLoader`] reads JSON files from disk.
//! - [`MemoryLoader`] serves documents registered in memory.
//!
//! Both parse with [`parse_document`] so malformed input is reported the
//! same way regardless of origin.

pub mod fs_loader;
pub mod memory;

pub use fs_loader::JsonFileLoader;
pub use memory::MemoryLoader;

use keyparity_core::errors::{KeyParityError, Result};
use keyparity_core::{DocumentId, ParsedTree};

/// Parse document text into a tree
///
/// A leading UTF-8 byte order mark is ignored; translation files exported
/// from spreadsheet tools often carry one.
///
/// # Errors
///
/// - `DocumentParse` — the text is not valid JSON
pub fn parse_document(id: &DocumentId, text: &str) -> Result<ParsedTree> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    serde_json::from_str(text).map_err(|e| KeyParityError::DocumentParse {
        document_id: id.to_string(),
        reason: e.to_string(),
    })
}
