//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moda operations.
///
/// Only the I/O boundary produces these. Matching, scoring and schedule
/// projection degrade to sentinel values instead of failing.
#[derive(Debug, Error)]
pub enum Error {
    /// A data file could not be read
    #[error("Failed to read {}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file could not be turned into typed records
    #[error("Invalid input in {}: {message}", path.display())]
    Input { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Wrap an I/O failure on a specific path
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
