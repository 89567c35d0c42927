//! Error types for kinship-cli

use thiserror::Error;

/// Result type alias for kinship-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kinship-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from kinship-core (config, parsing)
    #[error("Core error: {0}")]
    Core(#[from] kinship_core::Error),

    /// Error from kinship-client
    #[error("Client error: {0}")]
    Client(#[from] kinship_client::Error),

    /// Error from kinship-web
    #[error("Server error: {0}")]
    Web(#[from] kinship_web::Error),

    /// The people dataset could not be loaded
    #[error("{0}")]
    LoadFailed(&'static str),
}
