//! In-memory loader

use super::parse_document;
use keyparity_core::errors::{KeyParityError, Result};
use keyparity_core::{DocumentId, DocumentLoader, ParsedTree};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone)]
enum Entry {
    Tree(ParsedTree),
    Text(String),
}

/// Serves documents registered in memory
///
/// Raw text entries are parsed on every load, so malformed content fails
/// exactly like a malformed file would. Every load request is recorded in
/// order; [`MemoryLoader::loads`] returns them.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    entries: HashMap<DocumentId, Entry>,
    loads: Mutex<Vec<DocumentId>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already-parsed tree
    pub fn with_tree(mut self, id: impl Into<DocumentId>, tree: ParsedTree) -> Self {
        self.entries.insert(id.into(), Entry::Tree(tree));
        self
    }

    /// Register raw document text
    pub fn with_text(mut self, id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
        self.entries.insert(id.into(), Entry::Text(text.into()));
        self
    }

    /// Ids passed to `load`, in call order
    pub fn loads(&self) -> Vec<DocumentId> {
        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, id: &DocumentId) -> Result<ParsedTree> {
        self.loads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(id.clone());
        match self.entries.get(id) {
            Some(Entry::Tree(tree)) => Ok(tree.clone()),
            Some(Entry::Text(text)) => parse_document(id, text),
            None => Err(KeyParityError::DocumentRead {
                document_id: id.to_string(),
                reason: "no such document".to_string(),
            }),
        }
    }
}
