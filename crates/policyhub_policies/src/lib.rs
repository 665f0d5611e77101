// --- File: crates/policyhub_policies/src/lib.rs ---

pub mod doc;
pub mod routes;

pub use routes::routes;
