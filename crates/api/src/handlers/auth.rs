//! Handlers for login, registration, and logout.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use moodlens_core::error::CoreError;
use serde::Deserialize;
use tower_sessions::Session;

use crate::auth::credentials::{self, RegisterForm};
use crate::error::{AppError, AppResult};
use crate::session::{self, LOGIN_PATH};
use crate::state::AppState;
use crate::views::{render, LoginPage, RegisterPage};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /login
pub async fn login_page() -> AppResult<Html<String>> {
    render(&LoginPage { error: None })
}

/// POST /login
///
/// On success the session is started and the browser is sent home. Bad
/// credentials re-render the form with a message.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    match credentials::authenticate(&state.pool, &input.username, &input.password).await {
        Ok(user) => {
            session::start_session(&session, &user).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(AppError::Core(CoreError::Unauthorized(message))) => {
            Ok(render(&LoginPage { error: Some(message) })?.into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /register
pub async fn register_page() -> AppResult<Html<String>> {
    render(&RegisterPage {
        error: None,
        username: String::new(),
    })
}

/// POST /register
///
/// On success the browser is sent to the login form. Mismatched passwords,
/// invalid input, and taken usernames re-render the form with a message.
pub async fn register(
    State(state): State<AppState>,
    Form(input): Form<RegisterForm>,
) -> AppResult<Response> {
    match credentials::register(&state.pool, &input).await {
        Ok(_) => Ok(Redirect::to(LOGIN_PATH).into_response()),
        Err(AppError::Core(CoreError::Validation(message) | CoreError::Conflict(message))) => {
            Ok(render(&RegisterPage {
                error: Some(message),
                username: input.username,
            })?
            .into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /logout
pub async fn logout(session: Session) -> AppResult<Redirect> {
    session::end_session(&session).await?;
    Ok(Redirect::to(LOGIN_PATH))
}
