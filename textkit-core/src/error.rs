//! Error types for text transformations

use thiserror::Error;

/// Errors raised by the transformations and their configuration
#[derive(Debug, Error)]
pub enum TextError {
    /// An argument violated a precondition
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Which precondition failed
        reason: String,
    },

    /// A break pattern that could not be compiled
    #[error("invalid break pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Configuration loading or validation error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        TextError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Result type for text operations
pub type Result<T> = std::result::Result<T, TextError>;
