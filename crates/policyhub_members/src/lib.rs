// --- File: crates/policyhub_members/src/lib.rs ---

pub mod doc;
pub mod routes;

pub use routes::routes;
