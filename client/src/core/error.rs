//! # Common Error Types
//!
//! Consolidated error handling for the client application.
//!
//! Errors fall into the three buckets every screen deals with:
//!
//! - **Validation**: a form field is missing or invalid; caught before any
//!   request is issued
//! - **Api**: the request failed in transit, or the response envelope's
//!   success flag was false (the server message is carried through)
//! - **Storage**: the local session store could not be read or written
//!
//! All three surface to the user as a blocking notice; none are retried
//! automatically.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error: network failures, non-2xx HTTP
    /// responses without a parseable envelope, JSON parse errors, or an
    /// envelope whose success flag was false.
    #[error("API error: {0}")]
    Api(String),

    /// Local session store error (read, write, or serialization).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Application state error, e.g. an operation that requires an active
    /// session when none is loaded.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error, raised before any request is made.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<shared::domain::workflow::TransitionError> for AppError {
    fn from(err: shared::domain::workflow::TransitionError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
