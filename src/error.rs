//! SnapScribe Error Types
//!
//! Centralized error handling for the bot core.

use thiserror::Error;

/// Central error type for SnapScribe
#[derive(Error, Debug)]
pub enum ScribeError {
    #[error("OCR engine error: {0}")]
    Recognition(String),

    #[error("Messaging gateway error: {0}")]
    Gateway(String),

    #[error("Document build error: {0}")]
    Document(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for SnapScribe operations
pub type ScribeResult<T> = Result<T, ScribeError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for ScribeError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        ScribeError::Lock(err.to_string())
    }
}
