use serde::{Serialize, Serializer};
use std::fmt;

/// One step into a parsed tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// Mapping entry
    Key(String),
    /// Sequence position (only produced under `ArrayPolicy::Index`)
    Index(usize),
}

/// Location of one leaf inside a parsed tree
///
/// Never empty. Rendered with `.` between keys and `[n]` for indices,
/// e.g. `menu.items[0].label`. Keys are not escaped, so the rendering is for
/// display only; equality is always segment-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// Build a path from segments; returns `None` for an empty list
    pub fn new(segments: Vec<Segment>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Build a path made only of mapping keys
    ///
    /// # Panics
    ///
    /// Panics if `keys` is empty.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<Segment> = keys.into_iter().map(|k| Segment::Key(k.into())).collect();
        assert!(!segments.is_empty(), "KeyPath must have at least one segment");
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if `self` is a strict prefix of `other`
    pub fn is_prefix_of(&self, other: &KeyPath) -> bool {
        self.segments.len() < other.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_rejected() {
        assert!(KeyPath::new(Vec::new()).is_none());
    }

    #[test]
    fn test_display_joins_keys_and_brackets_indices() {
        let path = KeyPath::new(vec![
            Segment::Key("menu".into()),
            Segment::Key("items".into()),
            Segment::Index(0),
            Segment::Key("label".into()),
        ])
        .unwrap();
        assert_eq!(path.to_string(), "menu.items[0].label");
        assert_eq!(KeyPath::from_keys(["b", "c"]).to_string(), "b.c");
    }

    #[test]
    fn test_key_and_index_segments_are_distinct() {
        let by_key = KeyPath::new(vec![Segment::Key("list".into()), Segment::Key("0".into())]);
        let by_index = KeyPath::new(vec![Segment::Key("list".into()), Segment::Index(0)]);
        assert_ne!(by_key, by_index);
    }

    #[test]
    fn test_prefix_is_strict() {
        let parent = KeyPath::from_keys(["a"]);
        let child = KeyPath::from_keys(["a", "b"]);
        assert!(parent.is_prefix_of(&child));
        assert!(!child.is_prefix_of(&parent));
        assert!(!parent.is_prefix_of(&parent));
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&KeyPath::from_keys(["a", "b"])).unwrap();
        assert_eq!(json, "\"a.b\"");
    }
}
