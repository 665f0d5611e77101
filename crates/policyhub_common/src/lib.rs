// --- File: crates/policyhub_common/src/lib.rs ---

pub mod error; // Error taxonomy and status codes
pub mod http; // Error -> HTTP response mapping
pub mod logging; // Tracing setup
pub mod models; // Shared records: users, members, policies
pub mod services; // Hasher / payment verifier abstractions
pub mod validation; // Required-field checks

// Re-export error types and utilities for easier access
pub use error::{
    internal_error, not_found, store_error, validation_error, Context, HttpStatusCode,
    PolicyHubError,
};

pub use http::{json_rejection, IntoHttpResponse};

pub use services::{
    BoxFuture, CredentialHasher, HashError, PaymentVerificationError, PaymentVerifier,
    ServiceFactory,
};

pub use models::{Member, Policy, User};
