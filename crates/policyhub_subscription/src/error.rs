// --- File: crates/policyhub_subscription/src/error.rs ---
use policyhub_common::{internal_error, validation_error, HttpStatusCode, PolicyHubError};
use policyhub_db::DbError;
use thiserror::Error;

/// Subscription-specific error types.
#[derive(Error, Debug)]
pub enum SubscriptionError {
    /// A required input was absent or empty
    #[error("Missing required fields: {0}")]
    MissingField(String),

    /// The user id could not be read as an integer
    #[error("Invalid userId: {0}")]
    InvalidUserId(String),

    /// The payment verifier refused the reference
    #[error("Payment reference rejected: {0}")]
    PaymentRejected(String),

    /// The payment verifier could not decide
    #[error("Payment verification unavailable: {0}")]
    VerifierUnavailable(String),

    /// A configured window is not a positive, representable number of days
    #[error("Invalid subscription window: {0} days")]
    InvalidWindow(i64),

    /// The store failed
    #[error(transparent)]
    Store(#[from] DbError),
}

/// Convert SubscriptionError to PolicyHubError
impl From<SubscriptionError> for PolicyHubError {
    fn from(err: SubscriptionError) -> Self {
        match err {
            SubscriptionError::MissingField(_)
            | SubscriptionError::InvalidUserId(_)
            | SubscriptionError::PaymentRejected(_) => validation_error(err),
            SubscriptionError::VerifierUnavailable(_) | SubscriptionError::InvalidWindow(_) => {
                internal_error(err)
            }
            SubscriptionError::Store(e) => e.into(),
        }
    }
}

impl HttpStatusCode for SubscriptionError {
    fn status_code(&self) -> u16 {
        match self {
            SubscriptionError::MissingField(_) => 400,
            SubscriptionError::InvalidUserId(_) => 400,
            SubscriptionError::PaymentRejected(_) => 400,
            SubscriptionError::VerifierUnavailable(_) => 500,
            SubscriptionError::InvalidWindow(_) => 500,
            SubscriptionError::Store(_) => 500,
        }
    }
}
