pub mod analysis;
pub mod auth;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the browser-facing route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                        home (session required)
/// /login                   login form, login (GET, POST)
/// /register                registration form, register (GET, POST)
/// /logout                  end session (GET)
///
/// /analyze                 classify one text (POST, session required)
/// /upload                  classify each line of a file (POST, session required)
/// /change_language         set session language (POST, session required)
/// ```
///
/// `/health` is mounted separately via [`health::router`].
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(analysis::router())
}
