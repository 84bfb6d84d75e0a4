use thiserror::Error;

/// A freshness configuration validation failure.
///
/// `path` is a JSON-path-like location within the assertion mapping
/// (`"assertion"` for whole-document parse failures).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation error at '{path}': {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result alias for freshness operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
