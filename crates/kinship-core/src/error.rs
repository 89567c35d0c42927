//! Error types for kinship-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for kinship-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kinship-core.
///
/// Resolution itself never fails; these cover parsing records and loading
/// configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration is missing, unreadable, or invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error tied to a specific file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File the operation touched
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A sex value other than male or female
    #[error("Invalid sex value: '{0}' (expected 'm' or 'f')")]
    InvalidSex(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
