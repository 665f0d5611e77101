// --- File: crates/policyhub_auth/src/routes.rs ---

use crate::handlers::{login_handler, register_handler, AuthState};
use axum::{routing::post, Router};
use policyhub_db::UserRepository;
use std::sync::Arc;

/// Creates a router containing all routes for the auth feature.
pub fn routes<R>(state: Arc<AuthState<R>>) -> Router
where
    R: UserRepository + 'static,
{
    Router::new()
        .route("/auth/register", post(register_handler::<R>))
        .route("/auth/login", post(login_handler::<R>))
        .with_state(state)
}
