use crate::model::{KeyPath, ParsedTree, Segment};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How non-empty sequences are treated during extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayPolicy {
    /// The whole sequence is one leaf; its length and content are values
    #[default]
    Leaf,
    /// Each position is traversed with an index segment
    Index,
}

/// Ordered, duplicate-free leaf paths of one tree with their values
///
/// Iteration follows a pre-order walk of the tree in key insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeafPaths {
    entries: IndexMap<KeyPath, Value>,
}

impl LeafPaths {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, path: &KeyPath) -> bool {
        self.entries.contains_key(path)
    }

    /// Value stored at `path`, if this tree has that leaf
    pub fn value_at(&self, path: &KeyPath) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Paths in extraction order
    pub fn paths(&self) -> impl Iterator<Item = &KeyPath> {
        self.entries.keys()
    }

    /// `(path, value)` pairs in extraction order
    pub fn iter(&self) -> impl Iterator<Item = (&KeyPath, &Value)> {
        self.entries.iter()
    }
}

/// Extract every leaf path of `tree`
///
/// Depth-first and pre-order: mapping entries are visited in insertion
/// order. Scalars and empty containers are leaves; non-empty sequences are
/// leaves or traversed depending on `policy`. The walk uses an explicit
/// stack so deeply nested input cannot exhaust the call stack.
///
/// A root that is itself a leaf produces no paths, since a path needs at
/// least one segment.
pub fn extract_paths(tree: &ParsedTree, policy: ArrayPolicy) -> LeafPaths {
    let mut entries = IndexMap::new();
    // Current path from the root; each stack entry records the depth at
    // which its segment belongs so siblings can truncate back to it.
    let mut path: Vec<Segment> = Vec::new();
    let mut stack: Vec<(usize, Option<Segment>, &Value)> = vec![(0, None, tree)];

    while let Some((depth, segment, node)) = stack.pop() {
        path.truncate(depth);
        if let Some(segment) = segment {
            path.push(segment);
        }
        let child_depth = path.len();

        match node {
            Value::Object(map) if !map.is_empty() => {
                // Reverse so the first key is popped first
                for (key, child) in map.iter().rev() {
                    stack.push((child_depth, Some(Segment::Key(key.clone())), child));
                }
            }
            Value::Array(items) if !items.is_empty() && policy == ArrayPolicy::Index => {
                for (index, child) in items.iter().enumerate().rev() {
                    stack.push((child_depth, Some(Segment::Index(index)), child));
                }
            }
            leaf => {
                if let Some(leaf_path) = KeyPath::new(path.clone()) {
                    entries.insert(leaf_path, leaf.clone());
                }
            }
        }
    }

    tracing::debug!(leaf_count = entries.len(), ?policy, "extracted leaf paths");
    LeafPaths { entries }
}
