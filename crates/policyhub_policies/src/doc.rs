// --- File: crates/policyhub_policies/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use policyhub_common::Policy;
use policyhub_crud::CreatedResponse;
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/policies",
    responses((status = 200, description = "All policies in id order", body = [Policy])),
    tag = "Policies"
)]
fn doc_list_policies_handler() {}

#[utoipa::path(
    get,
    path = "/policies/{id}",
    params(("id" = i64, Path, description = "Policy id")),
    responses((status = 200, description = "The policy, or null when absent", body = Option<Policy>)),
    tag = "Policies"
)]
fn doc_get_policy_handler() {}

#[utoipa::path(
    post,
    path = "/policies",
    request_body(content = Policy, example = json!({
        "memberId": 1,
        "planType": "Funeral",
        "coverLevel": 25000.0,
        "premium": 149.99,
        "startDate": "2024-01-01",
        "status": "active"
    })),
    responses(
        (status = 200, description = "Policy created", body = CreatedResponse),
        (status = 500, description = "Database error")
    ),
    tag = "Policies"
)]
fn doc_create_policy_handler() {}

#[utoipa::path(
    put,
    path = "/policies/{id}",
    params(("id" = i64, Path, description = "Policy id")),
    request_body = Policy,
    responses((status = 200, description = "Updated (also when no row matched)")),
    tag = "Policies"
)]
fn doc_update_policy_handler() {}

#[utoipa::path(
    delete,
    path = "/policies/{id}",
    params(("id" = i64, Path, description = "Policy id")),
    responses((status = 200, description = "Deleted (also when no row matched)")),
    tag = "Policies"
)]
fn doc_delete_policy_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_policies_handler,
        doc_get_policy_handler,
        doc_create_policy_handler,
        doc_update_policy_handler,
        doc_delete_policy_handler
    ),
    components(schemas(Policy, CreatedResponse)),
    tags((name = "Policies", description = "Insurance policies held by members"))
)]
pub struct PoliciesApiDoc;
