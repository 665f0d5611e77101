// --- File: crates/policyhub_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The error type returned by every PolicyHub handler.
///
/// Each variant maps to exactly one HTTP status through [`HttpStatusCode`].
/// Feature crates convert their own errors into this type with `From`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyHubError {
    /// A required request field was absent or empty
    #[error("{0}")]
    ValidationError(String),

    /// Registration with an email that is already taken
    #[error("Email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password; the two cases are not distinguished
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Credentials were fine but the access window has closed
    #[error("Your free trial has expired. Please subscribe to continue.")]
    TrialExpired { expiry_date: Option<String> },

    /// A looked-up resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Any failure reported by the store
    #[error("Database error: {0}")]
    StoreError(String),

    /// Unexpected failure outside the store (hashing, verification plumbing)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for PolicyHubError {
    fn status_code(&self) -> u16 {
        match self {
            PolicyHubError::ValidationError(_) => 400,
            PolicyHubError::DuplicateEmail => 400,
            PolicyHubError::InvalidCredentials => 400,
            PolicyHubError::TrialExpired { .. } => 403,
            PolicyHubError::NotFound(_) => 404,
            PolicyHubError::StoreError(_) => 500,
            PolicyHubError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to foreign errors while converting them.
pub trait Context<T, E> {
    /// Wraps the error as an [`PolicyHubError::InternalError`] prefixed by `context`.
    fn context<C>(self, context: C) -> Result<T, PolicyHubError>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, PolicyHubError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| PolicyHubError::InternalError(format!("{}: {}", context, error)))
    }
}

impl From<serde_json::Error> for PolicyHubError {
    fn from(err: serde_json::Error) -> Self {
        PolicyHubError::ValidationError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> PolicyHubError {
    PolicyHubError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> PolicyHubError {
    PolicyHubError::NotFound(message.to_string())
}

pub fn store_error<T: fmt::Display>(message: T) -> PolicyHubError {
    PolicyHubError::StoreError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> PolicyHubError {
    PolicyHubError::InternalError(message.to_string())
}
