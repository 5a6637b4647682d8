//! Error types for the Mimi backend client.

use thiserror::Error;

/// Errors that can occur while talking to the marketplace backend.
///
/// The seller console never retries automatically; callers either surface
/// the message to the user or degrade to an empty/default view.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    ///
    /// `message` is the backend's own message when it sent a usable one
    /// (plain-text or JSON-string body), otherwise the caller's default.
    #[error("Backend error ({status}): {message}")]
    Backend {
        /// HTTP status code of the response
        status: u16,
        /// Message surfaced to the caller
        message: String,
    },

    /// The request timed out before the backend answered.
    #[error("Request timed out")]
    Timeout,

    /// A 2xx response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The configured base URL is not a valid URL.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// A transport-level error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status of the failure, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
