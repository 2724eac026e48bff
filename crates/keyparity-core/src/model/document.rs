use serde::{Deserialize, Serialize};
use std::path::Path;

/// A parsed document tree
///
/// Mappings keep their keys in insertion order (serde_json is built with
/// `preserve_order`), which is what makes path extraction order-stable.
pub type ParsedTree = serde_json::Value;

/// Opaque identifier of one input document within a run
///
/// Usually a file path. The full string is the document's *name* for
/// grouping purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a new DocumentId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The name the grouping pattern is matched against
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short label used when listing alternative values
    ///
    /// The final path component with a trailing `.json` removed, so
    /// `locales/fr.json` is shown as `fr`.
    pub fn label(&self) -> &str {
        let base = Path::new(&self.0)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.0);
        match base.strip_suffix(".json") {
            Some(stem) if !stem.is_empty() => stem,
            _ => base,
        }
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&Path> for DocumentId {
    fn from(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}
