use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A custom format was requested by a name that was never registered.
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    /// A relationship was requested by a name that was never registered.
    #[error("relationship '{0}' not found")]
    RelationshipNotFound(String),
    /// A `pattern` constraint failed to compile; callers are expected to
    /// validate schemas before generation starts.
    #[error("invalid pattern for column '{column}': {message}")]
    InvalidPattern { column: String, message: String },
    /// The schema failed precondition validation.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

impl From<mocksmith_core::Error> for GenerationError {
    fn from(err: mocksmith_core::Error) -> Self {
        GenerationError::InvalidSchema(err.to_string())
    }
}
