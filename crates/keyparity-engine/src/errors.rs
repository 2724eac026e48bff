//! Error handling for keyparity-engine
//!
//! The engine speaks `ExError`; these helpers attach engine-level context.

use keyparity_core::errors::{ExError, KeyParityError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Convert a configuration failure, tagging the operation that rejected it
pub fn configuration_error(op: &str, err: KeyParityError) -> ExError {
    ExError::from(err).with_op(op.to_string())
}

/// Convert a loader failure for one document
pub fn load_error(err: KeyParityError) -> ExError {
    ExError::from(err).with_op("load_document")
}
