// --- File: crates/policyhub_subscription/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;
use crate::handlers::{PayRequest, PayResponse, SubscriptionStatusResponse, UserIdInput};

#[utoipa::path(
    post,
    path = "/subscription/pay", // Path relative to /api
    request_body(content = PayRequest, example = json!({
        "userId": 1,
        "reference": "pay_3NkX8d2eZvKYlo2C"
    })),
    responses(
        (status = 200, description = "Payment recorded, window reset to a full period from now", body = PayResponse),
        (status = 400, description = "Missing userId or reference, non-numeric userId, or rejected reference"),
        (status = 500, description = "Database error")
    ),
    tag = "Subscription"
)]
fn doc_pay_handler() {}

#[utoipa::path(
    get,
    path = "/subscription/status/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Current access state", body = SubscriptionStatusResponse),
        (status = 404, description = "No such user")
    ),
    tag = "Subscription"
)]
fn doc_subscription_status_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_pay_handler, doc_subscription_status_handler),
    components(schemas(PayRequest, PayResponse, SubscriptionStatusResponse, UserIdInput)),
    tags((name = "Subscription", description = "Trial and paid access windows"))
)]
pub struct SubscriptionApiDoc;
