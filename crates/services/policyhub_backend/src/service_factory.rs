// --- File: crates/services/policyhub_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Wires the production collaborators: Argon2id for credentials and a
//! verifier that trusts payment references confirmed upstream.
use policyhub_auth::Argon2Hasher;
use policyhub_common::services::{CredentialHasher, PaymentVerifier, ServiceFactory};
use policyhub_subscription::TrustedReferenceVerifier;
use std::sync::Arc;
use tracing::info;

pub struct PolicyHubServiceFactory {
    credential_hasher: Arc<dyn CredentialHasher>,
    payment_verifier: Arc<dyn PaymentVerifier>,
}

impl PolicyHubServiceFactory {
    /// Create a new service factory.
    pub fn new() -> Self {
        info!("Initializing services: argon2id hasher, trusted payment references");
        Self {
            credential_hasher: Arc::new(Argon2Hasher::new()),
            payment_verifier: Arc::new(TrustedReferenceVerifier::new()),
        }
    }

    /// Replace the payment verifier, e.g. with one that calls a gateway.
    pub fn with_payment_verifier(mut self, verifier: Arc<dyn PaymentVerifier>) -> Self {
        self.payment_verifier = verifier;
        self
    }

    /// Replace the credential hasher.
    pub fn with_credential_hasher(mut self, hasher: Arc<dyn CredentialHasher>) -> Self {
        self.credential_hasher = hasher;
        self
    }
}

impl Default for PolicyHubServiceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceFactory for PolicyHubServiceFactory {
    fn credential_hasher(&self) -> Arc<dyn CredentialHasher> {
        self.credential_hasher.clone()
    }

    fn payment_verifier(&self) -> Arc<dyn PaymentVerifier> {
        self.payment_verifier.clone()
    }
}
