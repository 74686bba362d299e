//! Liveness endpoint for MoodLens.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use moodlens_core::language::Language;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the user database and the upload directory are both usable,
    /// `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// The users database answers `SELECT 1`.
    pub db_healthy: bool,
    /// The upload directory exists and is a directory.
    pub upload_dir_ready: bool,
    /// Language codes accepted by `/change_language`.
    pub languages: Vec<&'static str>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = moodlens_db::health_check(&state.pool).await.is_ok();
    let upload_dir_ready = tokio::fs::metadata(&state.config.upload_dir)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    let status = if db_healthy && upload_dir_ready {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        upload_dir_ready,
        languages: Language::ALL.iter().map(|lang| lang.code()).collect(),
    })
}

/// `GET /health`, mounted outside the session guard.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
