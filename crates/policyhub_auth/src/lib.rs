// --- File: crates/policyhub_auth/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod hasher;
pub mod routes;

// Re-export for main backend
pub use routes::routes;
pub use handlers::AuthState;
pub use hasher::Argon2Hasher;
pub use error::AuthError;
