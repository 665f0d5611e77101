// --- File: crates/policyhub_subscription/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;
pub mod service;

// Re-export for main backend
pub use routes::routes;
pub use handlers::SubscriptionState;
pub use logic::{is_active, is_active_at, SubscriptionLifecycle};
pub use service::TrustedReferenceVerifier;
pub use error::SubscriptionError;
