//! Error handling module for the ednt CLI.

use thiserror::Error;

/// Main error type for the ednt CLI application.
#[derive(Error, Debug)]
pub enum EdntError {
    /// Error when loading or interpreting configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the EDN reader (lexing, parsing, normalizing, file
    /// access).
    #[error(transparent)]
    Reader(#[from] ednr::Error),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finishes with failures.
    #[error("Command failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using EdntError.
pub type Result<T> = std::result::Result<T, EdntError>;
