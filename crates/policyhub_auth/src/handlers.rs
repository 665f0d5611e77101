// --- File: crates/policyhub_auth/src/handlers.rs ---
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use policyhub_common::services::CredentialHasher;
use policyhub_common::validation::require_all;
use policyhub_common::{json_rejection, Context, PolicyHubError};
use policyhub_db::UserRepository;
use policyhub_subscription::{is_active, SubscriptionLifecycle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// Shared state for authentication handlers.
pub struct AuthState<R> {
    pub lifecycle: Arc<SubscriptionLifecycle<R>>,
    pub hasher: Arc<dyn CredentialHasher>,
}

#[derive(Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegisterResponse {
    pub message: String,
    pub trial_ends: DateTime<Utc>,
}

#[derive(Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    pub message: String,
}

/// Runs a hasher operation on the blocking pool.
async fn with_hasher<T, F>(hasher: &Arc<dyn CredentialHasher>, op: F) -> Result<T, PolicyHubError>
where
    T: Send + 'static,
    F: FnOnce(&dyn CredentialHasher) -> Result<T, policyhub_common::HashError> + Send + 'static,
{
    let hasher = Arc::clone(hasher);
    tokio::task::spawn_blocking(move || op(hasher.as_ref()))
        .await
        .context("Credential hasher task failed")?
        .map_err(|e| AuthError::Hash(e).into())
}

/// `POST /auth/register`: create an account and open its trial window.
pub async fn register_handler<R>(
    State(state): State<Arc<AuthState<R>>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, PolicyHubError>
where
    R: UserRepository + 'static,
{
    let Json(payload) = payload.map_err(json_rejection)?;
    require_all(&[
        ("name", payload.name.as_deref()),
        ("email", payload.email.as_deref()),
        ("password", payload.password.as_deref()),
    ])?;
    let name = payload.name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    debug!("Registering {}", email);

    let digest = with_hasher(&state.hasher, move |hasher| hasher.hash(&password)).await?;

    let users = state.lifecycle.users();
    let user_id = users
        .create_user(&name, &email, &digest)
        .await
        .map_err(AuthError::from)?;
    let trial_ends = state
        .lifecycle
        .grant_trial(user_id)
        .await
        .map_err(AuthError::from)?;
    info!("Registered user {} ({})", user_id, email);

    Ok(Json(RegisterResponse {
        message: "User registered successfully".to_string(),
        trial_ends,
    }))
}

/// `POST /auth/login`: check credentials, then the access window.
pub async fn login_handler<R>(
    State(state): State<Arc<AuthState<R>>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, PolicyHubError>
where
    R: UserRepository + 'static,
{
    let Json(payload) = payload.map_err(json_rejection)?;
    require_all(&[
        ("email", payload.email.as_deref()),
        ("password", payload.password.as_deref()),
    ])?;
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let user = state
        .lifecycle
        .users()
        .find_by_email(&email)
        .await
        .map_err(AuthError::from)?
        .ok_or_else(|| {
            debug!("Login for unknown email {}", email);
            AuthError::InvalidCredentials
        })?;

    let digest = user.password.clone();
    let matches =
        with_hasher(&state.hasher, move |hasher| hasher.verify(&password, &digest)).await?;
    if !matches {
        debug!("Wrong password for user {}", user.id);
        return Err(AuthError::InvalidCredentials.into());
    }

    if !is_active(&user) {
        warn!("Login refused for user {}: subscription expired", user.id);
        return Err(AuthError::TrialExpired {
            expiry_date: user
                .subscription_expiry
                .map(|expiry| expiry.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
        .into());
    }

    info!("User {} logged in", user.id);
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
    }))
}
