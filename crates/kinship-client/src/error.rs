//! Error types for kinship-client

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for kinship-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching people records.
///
/// Callers that only care whether the fetch worked can treat every variant
/// alike; the variants exist for logs.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level HTTP failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        /// Requested URL
        url: String,
        /// Status code returned
        status: u16,
    },

    /// Payload was not a JSON array of people
    #[error("Malformed people payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a local dataset failed
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Dataset path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Source URL could not be parsed
    #[error("Invalid source URL '{url}': {message}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Parser message
        message: String,
    },

    /// Source is deliberately unavailable
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

impl Error {
    /// Returns `true` if the failure was caused by the request itself rather
    /// than the remote side or the network.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Status { status, .. } => (400..500).contains(status),
            Error::InvalidUrl { .. } => true,
            Error::Http(_) | Error::Decode(_) | Error::Io { .. } | Error::Unavailable(_) => false,
        }
    }
}
