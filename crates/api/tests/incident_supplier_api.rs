//! HTTP-level integration tests for incident reporting and the supplier
//! register.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn client_reports_and_lists_incidents(pool: PgPool) {
    let org = common::create_org(&pool, "Acme BV").await;
    let (_user, password) = common::create_client(&pool, "client@acme.test", org.id).await;
    let app = common::build_test_app(pool);

    let token = common::access_token(&app, "client@acme.test", &password).await;
    let response = post_json_auth(
        &app,
        &format!("/api/v1/organisations/{}/incidents", org.id),
        &token,
        serde_json::json!({
            "incident_type": "ransomware",
            "impact": "production systems encrypted",
            "discovered_at": "2026-02-01T09:30:00Z",
            "initial_actions": "isolated affected hosts",
            "contact_name": "Jan de Vries",
            "contact_email": "jan@acme.test",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let incident = body_json(response).await;
    assert_eq!(incident["incident_type"], "ransomware");
    assert_eq!(incident["organisation_id"], org.id);

    let response = get_auth(
        &app,
        &format!("/api/v1/organisations/{}/incidents", org.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn incident_contact_fields_are_optional(pool: PgPool) {
    let org = common::create_org(&pool, "Acme BV").await;
    let (_user, password) = common::create_client(&pool, "client@acme.test", org.id).await;
    let app = common::build_test_app(pool);

    let token = common::access_token(&app, "client@acme.test", &password).await;
    let response = post_json_auth(
        &app,
        &format!("/api/v1/organisations/{}/incidents", org.id),
        &token,
        serde_json::json!({
            "incident_type": "phishing",
            "impact": "one mailbox compromised",
            "discovered_at": "2026-02-02T14:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let incident = body_json(response).await;
    assert!(incident["contact_name"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_incident_fields_are_rejected(pool: PgPool) {
    let org = common::create_org(&pool, "Acme BV").await;
    let (_user, password) = common::create_client(&pool, "client@acme.test", org.id).await;
    let app = common::build_test_app(pool);

    let token = common::access_token(&app, "client@acme.test", &password).await;
    let response = post_json_auth(
        &app,
        &format!("/api/v1/organisations/{}/incidents", org.id),
        &token,
        serde_json::json!({
            "incident_type": "",
            "impact": "something",
            "discovered_at": "2026-02-02T14:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn client_cannot_touch_another_orgs_incidents(pool: PgPool) {
    let own = common::create_org(&pool, "Acme BV").await;
    let other = common::create_org(&pool, "Rival BV").await;
    let (_user, password) = common::create_client(&pool, "client@acme.test", own.id).await;
    let app = common::build_test_app(pool);

    let token = common::access_token(&app, "client@acme.test", &password).await;
    let response = get_auth(
        &app,
        &format!("/api/v1/organisations/{}/incidents", other.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn supplier_register_round_trip(pool: PgPool) {
    let org = common::create_org(&pool, "Acme BV").await;
    let (_user, password) = common::create_client(&pool, "client@acme.test", org.id).await;
    let app = common::build_test_app(pool);

    let token = common::access_token(&app, "client@acme.test", &password).await;

    for (name, risk) in [("Zeta Hosting", "high"), ("Alpha Cloud", "low")] {
        let response = post_json_auth(
            &app,
            &format!("/api/v1/organisations/{}/suppliers", org.id),
            &token,
            serde_json::json!({
                "name": name,
                "supplier_type": "hosting",
                "risk_level": risk,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Listed alphabetically by name.
    let response = get_auth(
        &app,
        &format!("/api/v1/organisations/{}/suppliers", org.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Alpha Cloud");
    assert_eq!(list[1]["name"], "Zeta Hosting");
    assert_eq!(list[0]["status"], "pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_supplier_risk_level_is_rejected(pool: PgPool) {
    let org = common::create_org(&pool, "Acme BV").await;
    let (_user, password) = common::create_client(&pool, "client@acme.test", org.id).await;
    let app = common::build_test_app(pool);

    let token = common::access_token(&app, "client@acme.test", &password).await;
    let response = post_json_auth(
        &app,
        &format!("/api/v1/organisations/{}/suppliers", org.id),
        &token,
        serde_json::json!({ "name": "Sketchy BV", "risk_level": "catastrophic" }),
    )
    .await;
    assert!(
        response.status().is_client_error(),
        "unknown risk level must be rejected, got {}",
        response.status()
    );
}
