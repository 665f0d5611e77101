// --- File: crates/services/policyhub_backend/src/app.rs ---
//! Router assembly and schema bootstrap.

use crate::app_state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use policyhub_auth::AuthState;
use policyhub_common::logging::log_result;
use policyhub_db::{
    DbClient, DbError, Repository, RepositoryFactory, SqlMemberRepository, SqlPolicyRepository,
    SqlRepositoryFactory, SqlUserRepository, UserRepository,
};
use policyhub_subscription::{SubscriptionLifecycle, SubscriptionState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create all tables if missing. Members go before policies, which reference them.
pub async fn init_schema(db_client: &DbClient) -> Result<(), DbError> {
    let factory = SqlRepositoryFactory::new();

    let users: SqlUserRepository = factory.create_repository(db_client.clone());
    log_result(
        users.init_schema().await,
        "users table ready",
        "Failed to create users table",
    )?;

    let members: SqlMemberRepository = factory.create_repository(db_client.clone());
    log_result(
        members.init_schema().await,
        "members table ready",
        "Failed to create members table",
    )?;

    let policies: SqlPolicyRepository = factory.create_repository(db_client.clone());
    log_result(
        policies.init_schema().await,
        "policies table ready",
        "Failed to create policies table",
    )
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: bool,
}

async fn health_handler(State(db_client): State<DbClient>) -> Json<HealthResponse> {
    let database = db_client.is_healthy().await;
    if !database {
        warn!("Health check: database unreachable");
    }
    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" }.to_string(),
        database,
    })
}

/// Every feature router, nested under `/api`.
pub fn build_app(state: &AppState) -> Router {
    let factory = SqlRepositoryFactory::new();
    let users: SqlUserRepository = factory.create_repository(state.db_client.clone());
    let lifecycle = Arc::new(SubscriptionLifecycle::new(users, &state.config.subscription));

    let auth_router = policyhub_auth::routes(Arc::new(AuthState {
        lifecycle: lifecycle.clone(),
        hasher: state.service_factory.credential_hasher(),
    }));
    let subscription_router = policyhub_subscription::routes(Arc::new(SubscriptionState {
        lifecycle,
        verifier: state.service_factory.payment_verifier(),
    }));
    let members_router = policyhub_members::routes::<SqlMemberRepository>(
        factory.create_repository(state.db_client.clone()),
    );
    let policies_router = policyhub_policies::routes::<SqlPolicyRepository>(
        factory.create_repository(state.db_client.clone()),
    );

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the PolicyHub API!" }))
        .route("/health", get(health_handler))
        .with_state(state.db_client.clone())
        .merge(auth_router)
        .merge(subscription_router)
        .merge(members_router)
        .merge(policies_router);

    #[allow(unused_mut)] // only the openapi feature adds routes
    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        app = app.merge(swagger_ui());
    }

    app.layer(TraceLayer::new_for_http())
}

#[cfg(feature = "openapi")]
fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    use policyhub_auth::doc::AuthApiDoc;
    use policyhub_members::doc::MembersApiDoc;
    use policyhub_policies::doc::PoliciesApiDoc;
    use policyhub_subscription::doc::SubscriptionApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "PolicyHub API",
            version = "0.1.0",
            description = "Members, policies and subscription-gated accounts",
            license(name = "MIT", url = "https://opensource.org/licenses/MIT")
        ),
        tags((name = "PolicyHub", description = "Core service endpoints")),
        servers((url = "/api", description = "Main API Prefix")),
    )]
    struct ApiDoc;

    let mut openapi_doc = ApiDoc::openapi();
    openapi_doc.merge(AuthApiDoc::openapi());
    openapi_doc.merge(SubscriptionApiDoc::openapi());
    openapi_doc.merge(MembersApiDoc::openapi());
    openapi_doc.merge(PoliciesApiDoc::openapi());
    tracing::info!("Adding Swagger UI at /api/docs");

    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc)
}
