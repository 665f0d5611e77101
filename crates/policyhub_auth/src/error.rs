// --- File: crates/policyhub_auth/src/error.rs ---
use policyhub_common::services::HashError;
use policyhub_common::{internal_error, HttpStatusCode, PolicyHubError};
use policyhub_db::DbError;
use policyhub_subscription::SubscriptionError;
use thiserror::Error;

/// Authentication-specific error types.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateEmail,

    /// Unknown email and wrong password both end up here
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Subscription expired")]
    TrialExpired { expiry_date: Option<String> },

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Subscription(#[from] SubscriptionError),

    #[error(transparent)]
    Store(DbError),
}

impl From<DbError> for AuthError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(_) => AuthError::DuplicateEmail,
            other => AuthError::Store(other),
        }
    }
}

/// Convert AuthError to PolicyHubError
impl From<AuthError> for PolicyHubError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateEmail => PolicyHubError::DuplicateEmail,
            AuthError::InvalidCredentials => PolicyHubError::InvalidCredentials,
            AuthError::TrialExpired { expiry_date } => PolicyHubError::TrialExpired { expiry_date },
            AuthError::Hash(e) => internal_error(e),
            AuthError::Subscription(e) => e.into(),
            AuthError::Store(e) => e.into(),
        }
    }
}

impl HttpStatusCode for AuthError {
    fn status_code(&self) -> u16 {
        match self {
            AuthError::DuplicateEmail => 400,
            AuthError::InvalidCredentials => 400,
            AuthError::TrialExpired { .. } => 403,
            AuthError::Hash(_) => 500,
            AuthError::Subscription(e) => e.status_code(),
            AuthError::Store(_) => 500,
        }
    }
}
