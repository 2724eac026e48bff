//! Filesystem JSON loader

use super::parse_document;
use keyparity_core::errors::{KeyParityError, Result};
use keyparity_core::{DocumentId, DocumentLoader, ParsedTree};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads documents from JSON files
///
/// Document ids are file paths. Relative ids resolve against `root` when
/// one is set, otherwise against the working directory.
#[derive(Debug, Clone, Default)]
pub struct JsonFileLoader {
    root: Option<PathBuf>,
}

impl JsonFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative ids against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, id: &DocumentId) -> PathBuf {
        let path = Path::new(id.as_str());
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl DocumentLoader for JsonFileLoader {
    fn load(&self, id: &DocumentId) -> Result<ParsedTree> {
        let path = self.resolve(id);
        let text = fs::read_to_string(&path).map_err(|e| KeyParityError::DocumentRead {
            document_id: id.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })?;
        tracing::debug!(document_id = %id, bytes = text.len(), "read document");
        parse_document(id, &text)
    }
}
