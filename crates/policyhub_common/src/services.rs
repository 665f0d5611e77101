// --- File: crates/policyhub_common/src/services.rs ---
//! Service abstractions for collaborators the core does not own.
//!
//! Password hashing and payment confirmation are supplied from outside the
//! request handlers. Handlers only see these traits, so tests and alternative
//! deployments can substitute their own implementations.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Failure inside the credential hasher itself (not a password mismatch).
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Credential hashing failed: {0}")]
pub struct HashError(pub String);

/// One-way password hashing with a verify operation.
pub trait CredentialHasher: Send + Sync {
    /// Produce a self-describing digest for `password`.
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Check `password` against a digest previously produced by [`hash`](Self::hash).
    ///
    /// A digest that cannot be parsed counts as a mismatch.
    fn verify(&self, password: &str, digest: &str) -> Result<bool, HashError>;
}

/// Why a payment reference was not accepted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaymentVerificationError {
    /// The reference was checked and refused
    #[error("Payment reference rejected: {0}")]
    Rejected(String),

    /// The verifier could not reach a decision
    #[error("Payment verification unavailable: {0}")]
    Unavailable(String),
}

/// Confirms that a payment reference is genuine before a subscription is renewed.
pub trait PaymentVerifier: Send + Sync {
    /// Succeeds when `reference` is accepted as payment evidence for `user_id`.
    fn verify(&self, user_id: i64, reference: &str) -> BoxFuture<'_, (), PaymentVerificationError>;
}

/// A factory for the collaborators handed to feature routers.
pub trait ServiceFactory: Send + Sync {
    /// The credential hasher used by registration and login.
    fn credential_hasher(&self) -> Arc<dyn CredentialHasher>;

    /// The payment verifier consulted by the pay endpoint.
    fn payment_verifier(&self) -> Arc<dyn PaymentVerifier>;
}
