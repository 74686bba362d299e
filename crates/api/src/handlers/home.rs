//! Handlers for the home page and the language selector.

use axum::response::{Html, Redirect};
use axum::Form;
use moodlens_core::error::CoreError;
use moodlens_core::language::Language;
use serde::Deserialize;

use crate::error::AppResult;
use crate::session::{self, CurrentUser};
use crate::views::{render, HomePage, LanguageOption};

/// Form body for `POST /change_language`.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: Option<String>,
}

/// GET /
pub async fn home(current: CurrentUser) -> AppResult<Html<String>> {
    let language = session::current_language(&current.session).await?;
    render(&HomePage {
        username: current.user.username,
        languages: LanguageOption::all(language),
    })
}

/// POST /change_language
///
/// Unsupported codes are rejected and leave the stored language untouched.
pub async fn change_language(
    current: CurrentUser,
    Form(input): Form<LanguageForm>,
) -> AppResult<Redirect> {
    let code = input
        .language
        .ok_or_else(|| CoreError::Validation("Missing language".into()))?;
    let language = Language::parse(&code)?;

    session::set_language(&current.session, language).await?;
    tracing::info!(user_id = current.user.user_id, %language, "Language changed");

    Ok(Redirect::to("/"))
}
