//! Error types for catalogue requests.
//!
//! This module provides the [`HydraError`] type raised by the HTTP transport
//! and the [`Result`] convenience type. Record accessors never return errors:
//! a missing or malformed field is reported as `None`.

use thiserror::Error;

/// Error type for fetching documents from the catalogue API.
///
/// These errors stay inside the transport layer. The [`Fetch`](crate::Fetch)
/// seam consumed by the client logs them and reports an absent document.
#[derive(Error, Debug)]
pub enum HydraError {
    /// The request could not be sent or the connection failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("HTTP request to {url} failed with status {code}")]
    Status {
        /// URL that was requested
        url: String,
        /// HTTP status code returned by the server
        code: u16,
    },

    /// The response body was not valid JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response decoded to an empty document (`null`, `{}` or `[]`).
    #[error("Empty response from {0}")]
    EmptyResponse(String),

    /// A configured endpoint is not a valid URL.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser message
        reason: String,
    },

    /// IO error while reading the response body.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`HydraError`].
pub type Result<T> = std::result::Result<T, HydraError>;
