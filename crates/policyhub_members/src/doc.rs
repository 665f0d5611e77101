// --- File: crates/policyhub_members/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use policyhub_common::Member;
use policyhub_crud::CreatedResponse;
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/members",
    responses((status = 200, description = "All members in id order", body = [Member])),
    tag = "Members"
)]
fn doc_list_members_handler() {}

#[utoipa::path(
    get,
    path = "/members/{id}",
    params(("id" = i64, Path, description = "Member id")),
    responses((status = 200, description = "The member, or null when absent", body = Option<Member>)),
    tag = "Members"
)]
fn doc_get_member_handler() {}

#[utoipa::path(
    post,
    path = "/members",
    request_body(content = Member, example = json!({
        "name": "Jane Doe",
        "idNumber": "8001015009087",
        "address": "1 Main Road"
    })),
    responses(
        (status = 200, description = "Member created", body = CreatedResponse),
        (status = 500, description = "Duplicate idNumber or database error")
    ),
    tag = "Members"
)]
fn doc_create_member_handler() {}

#[utoipa::path(
    put,
    path = "/members/{id}",
    params(("id" = i64, Path, description = "Member id")),
    request_body = Member,
    responses((status = 200, description = "Updated (also when no row matched)")),
    tag = "Members"
)]
fn doc_update_member_handler() {}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    params(("id" = i64, Path, description = "Member id")),
    responses((status = 200, description = "Deleted (also when no row matched)")),
    tag = "Members"
)]
fn doc_delete_member_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_members_handler,
        doc_get_member_handler,
        doc_create_member_handler,
        doc_update_member_handler,
        doc_delete_member_handler
    ),
    components(schemas(Member, CreatedResponse)),
    tags((name = "Members", description = "Policyholder records"))
)]
pub struct MembersApiDoc;
