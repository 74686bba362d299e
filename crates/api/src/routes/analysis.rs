//! Route definitions for the home page and analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{analysis, home};
use crate::state::AppState;

/// ```text
/// GET  /                 -> home
/// POST /analyze          -> analyze
/// POST /upload           -> upload
/// POST /change_language  -> change_language
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/analyze", post(analysis::analyze))
        .route("/upload", post(analysis::upload))
        .route("/change_language", post(home::change_language))
}
