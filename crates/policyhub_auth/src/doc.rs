// --- File: crates/policyhub_auth/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;
use crate::handlers::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

#[utoipa::path(
    post,
    path = "/auth/register", // Path relative to /api
    request_body(content = RegisterRequest, example = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "password": "correct horse battery staple"
    })),
    responses(
        (status = 200, description = "Account created with an open trial window", body = RegisterResponse),
        (status = 400, description = "Missing fields or email already registered"),
        (status = 500, description = "Database or hashing failure")
    ),
    tag = "Auth"
)]
fn doc_register_handler() {}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials valid and access window open", body = LoginResponse),
        (status = 400, description = "Missing fields or invalid email/password"),
        (status = 403, description = "Trial or subscription expired; body carries trialExpired and expiryDate")
    ),
    tag = "Auth"
)]
fn doc_login_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_register_handler, doc_login_handler),
    components(schemas(RegisterRequest, RegisterResponse, LoginRequest, LoginResponse)),
    tags((name = "Auth", description = "Registration and login"))
)]
pub struct AuthApiDoc;
