// --- File: crates/services/policyhub_backend/tests/api_tests.rs ---
//! End-to-end checks of the assembled `/api` router over in-memory SQLite.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use policyhub_auth::Argon2Hasher;
use policyhub_backend::{build_app, init_schema, AppState, PolicyHubServiceFactory};
use policyhub_common::services::{BoxFuture, PaymentVerificationError, PaymentVerifier};
use policyhub_config::AppConfig;
use policyhub_db::{DbClient, SqlUserRepository, UserRepository};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct Harness {
    app: Router,
    users: SqlUserRepository,
}

async fn harness_with(factory: PolicyHubServiceFactory) -> Harness {
    let db_client = DbClient::from_url("sqlite::memory:").await.unwrap();
    init_schema(&db_client).await.unwrap();

    let factory = factory.with_credential_hasher(Arc::new(Argon2Hasher::with_params(1024, 1, 1).unwrap()));
    let state = AppState::builder(Arc::new(AppConfig::default()), db_client.clone())
        .with_service_factory(Arc::new(factory))
        .build();

    Harness {
        app: build_app(&state),
        users: SqlUserRepository::new(db_client),
    }
}

async fn harness() -> Harness {
    harness_with(PolicyHubServiceFactory::new()).await
}

impl Harness {
    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn register(&self, email: &str) -> i64 {
        let (status, _) = self
            .send(
                "POST",
                "/api/auth/register",
                Some(json!({ "name": "A", "email": email, "password": "p" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        self.users.find_by_email(email).await.unwrap().unwrap().id
    }

    async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": email, "password": password })),
        )
        .await
    }
}

fn assert_about(actual: &Value, expected: DateTime<Utc>) {
    let actual: DateTime<Utc> = serde_json::from_value(actual.clone()).unwrap();
    assert!((actual - expected).num_seconds().abs() <= 5, "{actual} vs {expected}");
}

#[tokio::test]
async fn welcome_and_health() {
    let h = harness().await;
    let response = h
        .app
        .clone()
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = h.send("GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "database": true }));
}

#[tokio::test]
async fn register_login_expire_pay_cycle() {
    let h = harness().await;

    let (status, body) = h
        .send(
            "POST",
            "/api/auth/register",
            Some(json!({ "name": "A", "email": "a@x.com", "password": "p" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_about(&body["trialEnds"], Utc::now() + Duration::days(30));

    let (status, body) = h.login("a@x.com", "p").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");

    let user = h.users.find_by_email("a@x.com").await.unwrap().unwrap();
    h.users
        .set_subscription_expiry(user.id, Some(Utc::now() - Duration::days(2)))
        .await
        .unwrap();

    let (status, body) = h.login("a@x.com", "p").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["trialExpired"], true);
    assert!(body["expiryDate"].is_string());

    let (status, body) = h
        .send(
            "POST",
            "/api/subscription/pay",
            Some(json!({ "userId": user.id.to_string(), "reference": "pay_1" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_about(&body["newExpiry"], Utc::now() + Duration::days(30));

    let (status, _) = h.login("a@x.com", "p").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = h
        .send("GET", &format!("/api/subscription/status/{}", user.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], true);
    assert_eq!(body["hasPaid"], true);
}

#[tokio::test]
async fn paying_early_does_not_stack_time() {
    let h = harness().await;
    let id = h.register("a@x.com").await;
    h.users
        .set_subscription_expiry(id, Some(Utc::now() + Duration::days(20)))
        .await
        .unwrap();

    let (status, body) = h
        .send(
            "POST",
            "/api/subscription/pay",
            Some(json!({ "userId": id, "reference": "pay_2" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_about(&body["newExpiry"], Utc::now() + Duration::days(30));
}

#[tokio::test]
async fn client_errors_on_auth_and_pay() {
    let h = harness().await;
    h.register("a@x.com").await;

    let (status, body) = h
        .send(
            "POST",
            "/api/auth/register",
            Some(json!({ "name": "B", "email": "a@x.com", "password": "q" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");

    let (status, _) = h.login("a@x.com", "wrong").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = h
        .send("POST", "/api/auth/login", Some(json!({ "email": "a@x.com" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = h
        .send("POST", "/api/subscription/pay", Some(json!({ "reference": "r" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = h
        .send(
            "POST",
            "/api/subscription/pay",
            Some(json!({ "userId": "abc", "reference": "r" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid userId: abc");
}

struct GatewayDown;

impl PaymentVerifier for GatewayDown {
    fn verify(&self, _user_id: i64, _reference: &str) -> BoxFuture<'_, (), PaymentVerificationError> {
        Box::pin(async { Err(PaymentVerificationError::Unavailable("timeout".to_string())) })
    }
}

#[tokio::test]
async fn unavailable_verifier_is_a_server_error() {
    let h = harness_with(PolicyHubServiceFactory::new().with_payment_verifier(Arc::new(GatewayDown))).await;
    let id = h.register("a@x.com").await;

    let (status, _) = h
        .send(
            "POST",
            "/api/subscription/pay",
            Some(json!({ "userId": id, "reference": "pay_3" })),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let user = h.users.find_by_id(id).await.unwrap().unwrap();
    assert!(!user.has_paid);
}

#[tokio::test]
async fn members_and_policies_crud() {
    let h = harness().await;

    let (status, body) = h
        .send(
            "POST",
            "/api/members",
            Some(json!({ "name": "Jane", "idNumber": "ID-1", "address": "1 Main Rd" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let member_id = body["id"].as_i64().unwrap();

    let (status, _) = h
        .send("POST", "/api/members", Some(json!({ "name": "Jim", "idNumber": "ID-1" })))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let policy = json!({
        "memberId": member_id,
        "planType": "Family",
        "coverLevel": 50000.5,
        "premium": 299.5,
        "startDate": "2024-03-01",
        "status": "active"
    });
    let (status, body) = h.send("POST", "/api/policies", Some(policy.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let policy_id = body["id"].as_i64().unwrap();

    let (_, body) = h.send("GET", &format!("/api/policies/{policy_id}"), None).await;
    let mut expected = policy;
    expected["id"] = json!(policy_id);
    assert_eq!(body, expected);

    let (_, body) = h.send("GET", "/api/members", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = h.send("DELETE", &format!("/api/members/{member_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = h.send("GET", &format!("/api/members/{member_id}"), None).await;
    assert_eq!((status, body), (StatusCode::OK, Value::Null));

    let (status, _) = h
        .send("PUT", "/api/policies/999", Some(json!({ "status": "lapsed" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = h.send("DELETE", "/api/policies/999", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_without_any_expiry_is_forbidden() {
    let h = harness().await;
    let id = h.register("a@x.com").await;
    h.users.set_subscription_expiry(id, None).await.unwrap();

    let (status, body) = h.login("a@x.com", "p").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["trialExpired"], true);
    assert_eq!(body["expiryDate"], Value::Null);

    let (status, body) = h.send("GET", &format!("/api/subscription/status/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], false);
    assert_eq!(body["subscriptionExpiry"], Value::Null);
}

#[tokio::test]
async fn members_without_address_are_listed() {
    let h = harness().await;
    let (status, _) = h
        .send("POST", "/api/members", Some(json!({ "name": "Jane", "idNumber": "ID-1" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = h
        .send(
            "POST",
            "/api/members",
            Some(json!({ "name": "Jim", "idNumber": "ID-2", "address": "2 Side St" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = h.send("GET", "/api/members", None).await;
    assert_eq!(status, StatusCode::OK);
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["address"], Value::Null);
    assert_eq!(members[1]["address"], "2 Side St");
}

#[tokio::test]
async fn record_fields_come_back_as_sent() {
    let h = harness().await;

    let member = json!({ "name": "Jane", "idNumber": 8001015009087_i64, "address": null });
    let (status, body) = h.send("POST", "/api/members", Some(member.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let member_id = body["id"].as_i64().unwrap();
    let (_, body) = h.send("GET", &format!("/api/members/{member_id}"), None).await;
    let mut expected = member;
    expected["id"] = json!(member_id);
    assert_eq!(body, expected);

    for (cover_level, premium) in [(json!("50000"), json!("299.50")), (json!(50000), json!(299))] {
        let policy = json!({
            "memberId": member_id,
            "planType": "Family",
            "coverLevel": cover_level,
            "premium": premium,
            "startDate": "2024-03-01",
            "status": "active"
        });
        let (status, body) = h.send("POST", "/api/policies", Some(policy.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let policy_id = body["id"].as_i64().unwrap();

        let (_, body) = h.send("GET", &format!("/api/policies/{policy_id}"), None).await;
        assert_eq!(body["coverLevel"], policy["coverLevel"]);
        assert_eq!(body["coverLevel"].to_string(), policy["coverLevel"].to_string());
        assert_eq!(body["premium"].to_string(), policy["premium"].to_string());
    }
}
