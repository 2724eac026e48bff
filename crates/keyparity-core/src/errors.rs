use thiserror::Error;

/// Result type alias using KeyParityError
pub type Result<T> = std::result::Result<T, KeyParityError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    InvalidPattern,
    UnmatchedDocument,

    // Loading
    DocumentRead,
    DocumentParse,

    // Integration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidPattern => "ERR_INVALID_PATTERN",
            ExErrorKind::UnmatchedDocument => "ERR_UNMATCHED_DOCUMENT",
            ExErrorKind::DocumentRead => "ERR_DOCUMENT_READ",
            ExErrorKind::DocumentParse => "ERR_DOCUMENT_PARSE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// True for kinds raised before any document is loaded
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidPattern | ExErrorKind::UnmatchedDocument
        )
    }

    /// True for kinds raised while acquiring a single document
    pub fn is_load(&self) -> bool {
        matches!(self, ExErrorKind::DocumentRead | ExErrorKind::DocumentParse)
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and the
/// document/pattern context needed to explain a failure to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    document_id: Option<String>,
    pattern: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            document_id: None,
            pattern: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add document context
    pub fn with_document(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }

    /// Add pattern context
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the document context, if any
    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    /// Get the pattern context, if any
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(document_id) = &self.document_id {
            write!(f, " (document: {})", document_id)?;
        }
        if let Some(pattern) = &self.pattern {
            write!(f, " (pattern: {})", pattern)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for keyparity operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyParityError {
    // ===== Configuration Errors =====
    /// A grouping or suppression pattern failed to compile or has no capture group
    #[error("Invalid {option} pattern '{pattern}': {reason}")]
    InvalidPattern {
        option: String,
        pattern: String,
        reason: String,
    },

    /// A document did not match the grouping pattern and unmatched documents are errors
    #[error("Document {document_id} does not match grouping pattern '{pattern}'")]
    UnmatchedDocument {
        document_id: String,
        pattern: String,
    },

    // ===== Load Errors =====
    /// The document could not be read from storage
    #[error("Failed to read document {document_id}: {reason}")]
    DocumentRead { document_id: String, reason: String },

    /// The document content is not a well-formed tree
    #[error("Failed to parse document {document_id}: {reason}")]
    DocumentParse { document_id: String, reason: String },

    // ===== Integration Errors =====
    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<KeyParityError> for ExError {
    fn from(err: KeyParityError) -> Self {
        match err {
            KeyParityError::InvalidPattern {
                option,
                pattern,
                reason,
            } => ExError::new(ExErrorKind::InvalidPattern)
                .with_pattern(pattern)
                .with_message(format!("Invalid {} pattern: {}", option, reason)),

            KeyParityError::UnmatchedDocument {
                document_id,
                pattern,
            } => ExError::new(ExErrorKind::UnmatchedDocument)
                .with_document(document_id)
                .with_pattern(pattern)
                .with_message("Document does not match the grouping pattern"),

            KeyParityError::DocumentRead {
                document_id,
                reason,
            } => ExError::new(ExErrorKind::DocumentRead)
                .with_document(document_id)
                .with_message(reason),

            KeyParityError::DocumentParse {
                document_id,
                reason,
            } => ExError::new(ExErrorKind::DocumentParse)
                .with_document(document_id)
                .with_message(reason),

            KeyParityError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to KeyParityError
impl From<serde_json::Error> for KeyParityError {
    fn from(err: serde_json::Error) -> Self {
        KeyParityError::Serialization {
            message: err.to_string(),
        }
    }
}
