//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["upload_dir_ready"], true);
    assert_eq!(json["languages"], serde_json::json!(["turkish", "english"]));
}

/// A missing upload directory degrades the service without failing the check.
#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_reports_missing_upload_dir(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    std::fs::remove_dir(app.upload_dir.path()).unwrap();

    let response = get(&app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["upload_dir_ready"], false);
    assert_eq!(json["db_healthy"], true);
}

/// The health check does not require a session.
#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_needs_no_session(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/health", None).await;

    assert!(common::session_cookie(&response).is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/this-route-does-not-exist", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_method_returns_405(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/analyze", None).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
