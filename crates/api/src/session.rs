//! Per-browser session state: the signed-in user and the chosen language.
//!
//! State lives server-side in a [`tower_sessions`] in-memory store keyed by a
//! session cookie. Sessions expire after `SESSION_IDLE_MINUTES` without a
//! request. Nothing here is persisted across server restarts.
//!
//! [`MemoryStore`] drops a record on logout but has no sweeper: an expired
//! session is ignored on load and its record stays in memory until the
//! process restarts. Memory use therefore grows with the number of sessions
//! created since startup, not with the number currently active.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use moodlens_core::language::Language;
use moodlens_core::types::DbId;
use moodlens_db::models::user::User;
use serde::{Deserialize, Serialize};
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::ServerConfig;
use crate::error::AppResult;
use crate::state::AppState;

/// Cookie carrying the session id.
pub const SESSION_COOKIE_NAME: &str = "moodlens_session";
/// Session key holding the [`SessionUser`].
pub const SESSION_USER_KEY: &str = "user";
/// Session key holding the selected [`Language`].
pub const SESSION_LANGUAGE_KEY: &str = "language";

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// Identity recorded in the session at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: DbId,
    pub username: String,
}

/// Build the session middleware layer.
pub fn session_layer(config: &ServerConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_secure(config.secure_cookies)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.session_idle_minutes,
        )))
}

/// Record `user` as signed in.
///
/// The session id is rotated first so an id issued before login cannot be
/// reused afterwards. Any language already chosen is kept.
pub async fn start_session(session: &Session, user: &User) -> AppResult<()> {
    session.cycle_id().await?;
    session
        .insert(
            SESSION_USER_KEY,
            SessionUser {
                user_id: user.id,
                username: user.username.clone(),
            },
        )
        .await?;
    tracing::info!(user_id = user.id, "Session started");
    Ok(())
}

/// The signed-in user, if any.
pub async fn current_user(session: &Session) -> AppResult<Option<SessionUser>> {
    Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
}

/// Store the language used for subsequent analyses.
pub async fn set_language(session: &Session, language: Language) -> AppResult<()> {
    session.insert(SESSION_LANGUAGE_KEY, language).await?;
    Ok(())
}

/// The session's language, defaulting to [`Language::Turkish`] when unset.
pub async fn current_language(session: &Session) -> AppResult<Language> {
    Ok(session
        .get::<Language>(SESSION_LANGUAGE_KEY)
        .await?
        .unwrap_or_default())
}

/// Clear all session state and delete it from the store.
pub async fn end_session(session: &Session) -> AppResult<()> {
    session.flush().await?;
    Ok(())
}

/// A request made by a signed-in user.
///
/// Use this as an extractor in any handler that requires a session. When no
/// user is signed in the request is redirected to `/login` without an error
/// message.
///
/// ```ignore
/// async fn my_handler(current: CurrentUser) -> AppResult<Html<String>> {
///     tracing::info!(user_id = current.user.user_id, "handling request");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: SessionUser,
    pub session: Session,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match current_user(&session).await.map_err(IntoResponse::into_response)? {
            Some(user) => Ok(CurrentUser { user, session }),
            None => Err(Redirect::to(LOGIN_PATH).into_response()),
        }
    }
}
