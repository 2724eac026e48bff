pub mod document;
pub mod key_path;

pub use document::{DocumentId, ParsedTree};
pub use key_path::{KeyPath, Segment};
