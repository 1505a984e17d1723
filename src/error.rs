//! Error types for the tokenseg library.
//!
//! All errors are represented by the [`TokensegError`] enum. Tokenization itself
//! never fails on valid input; errors come from configuration and from the I/O
//! performed by embedding applications.
//!
//! # Examples
//!
//! ```
//! use tokenseg::error::{Result, TokensegError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TokensegError::invalid_config("token_max_len must be at least 1"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tokenseg operations.
#[derive(Error, Debug)]
pub enum TokensegError {
    /// I/O errors (reading configuration or input text)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, classification)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid tokenizer configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TokensegError.
pub type Result<T> = std::result::Result<T, TokensegError>;

impl TokensegError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TokensegError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TokensegError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TokensegError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        TokensegError::Other(format!("Internal error: {}", msg.into()))
    }
}
