// --- File: crates/policyhub_crud/src/lib.rs ---

pub mod handlers;
pub mod routes;

pub use handlers::{CreatedResponse, CrudState, Record};
pub use routes::routes;
