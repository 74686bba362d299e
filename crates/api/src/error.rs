use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use moodlens_classifier::ClassifierError;
use moodlens_core::error::CoreError;

use crate::views::ErrorPage;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce a consistent HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `moodlens_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The sentiment backend failed or was unreachable.
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// The session store could not load or save session state.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body exceeded the configured upload limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message shown for every error that is not the caller's fault.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// Classify this error into an HTTP status, error code, and user-facing message.
    ///
    /// Internal failures are logged here and replaced with a generic message.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            // --- Upstream model errors ---
            AppError::Classifier(err) => {
                tracing::error!(error = %err, "Sentiment classifier failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "CLASSIFIER_ERROR",
                    "The sentiment model is unavailable. Please try again later.".to_string(),
                )
            }

            // --- Infrastructure errors ---
            AppError::Session(err) => {
                tracing::error!(error = %err, "Session store error");
                internal()
            }
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template render error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let page = ErrorPage {
            status: status.as_u16(),
            code,
            message: &message,
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            // Never recurse into AppError::Template here.
            Err(err) => {
                tracing::error!(error = %err, "Failed to render error page");
                (status, message).into_response()
            }
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}
