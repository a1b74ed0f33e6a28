//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses, including a live audit recorder.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use riskpilot_api::auth::jwt::JwtConfig;
use riskpilot_api::auth::password::hash_password;
use riskpilot_api::config::ServerConfig;
use riskpilot_api::router::build_app_router;
use riskpilot_api::state::AppState;
use riskpilot_core::scoring::default_catalog;
use riskpilot_core::types::DbId;
use riskpilot_db::models::organisation::{CreateOrganisation, Organisation};
use riskpilot_db::models::user::{CreateUser, User};
use riskpilot_db::repositories::{OrganisationRepo, UserRepo};
use riskpilot_events::{AuditBus, AuditRecorder};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router against the given pool, with the audit
/// recorder running in the background.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let audit_bus = Arc::new(AuditBus::default());
    tokio::spawn(AuditRecorder::run(pool.clone(), audit_bus.subscribe()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog: Arc::new(default_catalog()),
        audit_bus,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.clone()
        .oneshot(request)
        .await
        .expect("request should complete")
}

pub async fn get(app: &Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None).await
}

pub async fn get_auth(app: &Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, path, Some(token), None).await
}

pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, path, None, Some(body)).await
}

pub async fn post_json_auth(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, path, Some(token), Some(body)).await
}

pub async fn post_auth(app: &Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, path, Some(token), None).await
}

pub async fn patch_json_auth(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, path, Some(token), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create an organisation directly in the database.
pub async fn create_org(pool: &PgPool, name: &str) -> Organisation {
    OrganisationRepo::create(
        pool,
        &CreateOrganisation {
            name: name.to_string(),
            nis2_segment: "essential".to_string(),
        },
    )
    .await
    .expect("organisation creation should succeed")
}

/// Create a user directly in the database and return the row plus the
/// plaintext password used.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    role: &str,
    organisation_id: Option<DbId>,
) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hashed,
            role: role.to_string(),
            organisation_id,
        },
    )
    .await
    .expect("user creation should succeed");
    (user, password.to_string())
}

pub async fn create_consultant(pool: &PgPool, email: &str) -> (User, String) {
    create_user(pool, email, "consultant", None).await
}

pub async fn create_client(pool: &PgPool, email: &str, organisation_id: DbId) -> (User, String) {
    create_user(pool, email, "client", Some(organisation_id)).await
}

/// Log in via the API and return the full JSON response.
pub async fn login(app: &Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Log in via the API and return just the access token.
pub async fn access_token(app: &Router, email: &str, password: &str) -> String {
    login(app, email, password).await["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}
