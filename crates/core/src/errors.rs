//! Core error types for the seller console.
//!
//! Network access produces `ApiError`s in the client crate; everything here
//! wraps those plus the console's own failure modes. Malformed numeric and
//! date fields in backend data are deliberately NOT errors - they coerce to
//! zero or are skipped at the decoding layer.

use thiserror::Error;

use mimi_api_client::ApiError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the seller console core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Backend request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Order operation failed: {0}")]
    Order(#[from] OrderError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),
}

/// Failures of the session layer.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to encode the session user: {0}")]
    Encode(String),
}

/// Failures of order mutations.
#[derive(Error, Debug)]
pub enum OrderError {
    /// A second status submission arrived while one is still in flight.
    /// The first submission wins; this one is rejected, never queued.
    #[error("A status update for order {0} is already in flight")]
    UpdateInFlight(i64),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
