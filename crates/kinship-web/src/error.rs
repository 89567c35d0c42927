//! Error types for kinship-web

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for kinship-web operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kinship-web
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the record source
    #[error("Fetch failed: {0}")]
    Fetch(#[from] kinship_client::Error),

    /// No record carries the requested slug
    #[error("No person with slug '{0}'")]
    PersonNotFound(String),

    /// Could not bind the listen address
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },

    /// Server I/O failure while running
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status reported to API clients.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Fetch(_) => StatusCode::BAD_GATEWAY,
            Error::PersonNotFound(_) => StatusCode::NOT_FOUND,
            Error::Bind { .. } | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_maps_to_bad_gateway() {
        let err: Error = kinship_client::Error::Unavailable("down".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Fetch failed: Source unavailable: down");
    }

    #[test]
    fn test_person_not_found_response() {
        let resp = Error::PersonNotFound("nobody-1900".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bind_error_display() {
        let err = Error::Bind {
            addr: "127.0.0.1:80".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to bind 127.0.0.1:80: denied");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
