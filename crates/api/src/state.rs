use std::sync::Arc;

use moodlens_classifier::registry::ClassifierRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: moodlens_db::DbPool,
    /// Server configuration (upload directory, limits).
    pub config: Arc<ServerConfig>,
    /// One sentiment classifier per supported language, fixed at startup.
    pub classifiers: Arc<ClassifierRegistry>,
}
