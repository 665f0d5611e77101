// --- File: crates/policyhub_subscription/src/handlers.rs ---
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use chrono::{DateTime, Utc};
use policyhub_common::services::{PaymentVerificationError, PaymentVerifier};
use policyhub_common::validation::required;
use policyhub_common::{json_rejection, not_found, validation_error, PolicyHubError};
use policyhub_db::UserRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::SubscriptionError;
use crate::logic::{is_active, SubscriptionLifecycle};

/// Shared state for subscription handlers.
pub struct SubscriptionState<R> {
    pub lifecycle: Arc<SubscriptionLifecycle<R>>,
    pub verifier: Arc<dyn PaymentVerifier>,
}

/// A user id as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum UserIdInput {
    Number(i64),
    Text(String),
}

impl UserIdInput {
    /// `None` for an empty string, an error for non-numeric text.
    fn resolve(&self) -> Result<Option<i64>, SubscriptionError> {
        match self {
            UserIdInput::Number(id) => Ok(Some(*id)),
            UserIdInput::Text(text) if text.is_empty() => Ok(None),
            UserIdInput::Text(text) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| SubscriptionError::InvalidUserId(text.clone())),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PayRequest {
    pub user_id: Option<UserIdInput>,
    /// Payment reference issued by the gateway
    pub reference: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PayResponse {
    pub message: String,
    pub new_expiry: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SubscriptionStatusResponse {
    pub user_id: i64,
    pub active: bool,
    pub subscription_expiry: Option<DateTime<Utc>>,
    pub has_paid: bool,
}

/// `POST /subscription/pay`: renew a subscription from a payment reference.
pub async fn pay_handler<R>(
    State(state): State<Arc<SubscriptionState<R>>>,
    payload: Result<Json<PayRequest>, JsonRejection>,
) -> Result<Json<PayResponse>, PolicyHubError>
where
    R: UserRepository + 'static,
{
    let Json(payload) = payload.map_err(json_rejection)?;
    debug!("Payment request: {:?}", payload);

    let user_id = match payload.user_id.as_ref() {
        Some(input) => input.resolve()?,
        None => None,
    };
    let reference = required(payload.reference.as_deref());

    let (user_id, reference) = match (user_id, reference) {
        (Some(user_id), Some(reference)) => (user_id, reference),
        (user_id, reference) => {
            let mut missing = Vec::new();
            if user_id.is_none() {
                missing.push("userId");
            }
            if reference.is_none() {
                missing.push("reference");
            }
            return Err(SubscriptionError::MissingField(missing.join(", ")).into());
        }
    };

    state
        .verifier
        .verify(user_id, reference)
        .await
        .map_err(|e| {
            warn!("Payment {} for user {} not accepted: {}", reference, user_id, e);
            match e {
                PaymentVerificationError::Rejected(msg) => SubscriptionError::PaymentRejected(msg),
                PaymentVerificationError::Unavailable(msg) => {
                    SubscriptionError::VerifierUnavailable(msg)
                }
            }
        })?;

    let new_expiry = state.lifecycle.renew(user_id, reference).await?;

    Ok(Json(PayResponse {
        message: "Payment successful, subscription renewed".to_string(),
        new_expiry,
    }))
}

/// `GET /subscription/status/{user_id}`: current access state of a user.
pub async fn subscription_status_handler<R>(
    State(state): State<Arc<SubscriptionState<R>>>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SubscriptionStatusResponse>, PolicyHubError>
where
    R: UserRepository + 'static,
{
    let Path(user_id) = user_id.map_err(|e| validation_error(e.body_text()))?;

    let user = state
        .lifecycle
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| not_found(format!("User {} not found", user_id)))?;

    Ok(Json(SubscriptionStatusResponse {
        user_id: user.id,
        active: is_active(&user),
        subscription_expiry: user.subscription_expiry,
        has_paid: user.has_paid,
    }))
}
