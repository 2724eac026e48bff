//! Document acquisition seam.
//!
//! The comparison engine never reads storage itself. Callers supply a
//! [`DocumentLoader`] that turns a [`DocumentId`] into a [`ParsedTree`];
//! implementations live in `keyparity-engine`.

use crate::errors::Result;
use crate::model::{DocumentId, ParsedTree};

/// Loads and parses one document
///
/// Implementations report unreadable input as `DocumentRead` and malformed
/// input as `DocumentParse`. Loaders are shared across groups and must not
/// keep per-run state.
pub trait DocumentLoader: Send + Sync {
    /// Load the document identified by `id`
    ///
    /// # Errors
    ///
    /// - `DocumentRead` — the document could not be acquired
    /// - `DocumentParse` — the content is not a well-formed tree
    fn load(&self, id: &DocumentId) -> Result<ParsedTree>;
}

impl<L: DocumentLoader + ?Sized> DocumentLoader for &L {
    fn load(&self, id: &DocumentId) -> Result<ParsedTree> {
        (**self).load(id)
    }
}
