// --- File: crates/policyhub_subscription/src/routes.rs ---

use crate::handlers::{pay_handler, subscription_status_handler, SubscriptionState};
use axum::{
    routing::{get, post},
    Router,
};
use policyhub_db::UserRepository;
use std::sync::Arc;

/// Creates a router containing all routes for the subscription feature.
pub fn routes<R>(state: Arc<SubscriptionState<R>>) -> Router
where
    R: UserRepository + 'static,
{
    Router::new()
        .route("/subscription/pay", post(pay_handler::<R>))
        .route(
            "/subscription/status/{user_id}",
            get(subscription_status_handler::<R>),
        )
        .with_state(state)
}
