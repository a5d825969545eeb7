//! Error types for octoscope.

use thiserror::Error;

/// octoscope error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for octoscope operations.
pub type Result<T> = std::result::Result<T, Error>;
