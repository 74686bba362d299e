//! Server-rendered HTML pages.
//!
//! Each page is an [`askama`] template compiled from `templates/`. Output is
//! HTML-escaped by default, so user text and filenames render literally.

use askama::Template;
use axum::response::Html;
use moodlens_core::language::Language;
use moodlens_core::sentiment::AnalysisResult;

use crate::error::AppResult;

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

/// `GET /login` and failed `POST /login`.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub error: Option<String>,
}

/// `GET /register` and failed `POST /register`.
#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub error: Option<String>,
    /// Echoed back so the user does not have to retype it.
    pub username: String,
}

/// One entry of the language selector.
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

impl LanguageOption {
    /// Every supported language, with `current` marked selected.
    pub fn all(current: Language) -> Vec<Self> {
        Language::ALL
            .into_iter()
            .map(|lang| LanguageOption {
                code: lang.code(),
                name: lang.display_name(),
                selected: lang == current,
            })
            .collect()
    }
}

/// `GET /` -- text form, upload form, language selector.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub username: String,
    pub languages: Vec<LanguageOption>,
}

/// A rendered analysis row.
pub struct ResultRow {
    pub text: String,
    pub sentiment: String,
    /// Always two decimals, e.g. `"0.50"`.
    pub score: String,
}

impl From<&AnalysisResult> for ResultRow {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            text: result.text.clone(),
            sentiment: result.sentiment.clone(),
            score: result.score_display(),
        }
    }
}

/// Results of `POST /analyze` (one row) or `POST /upload` (one row per line).
#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage {
    pub language: &'static str,
    pub source: Option<String>,
    pub results: Vec<ResultRow>,
}

impl ResultPage {
    pub fn new(language: Language, source: Option<String>, results: &[AnalysisResult]) -> Self {
        Self {
            language: language.display_name(),
            source,
            results: results.iter().map(ResultRow::from).collect(),
        }
    }
}

/// Generic error page used by [`AppError`](crate::error::AppError).
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub status: u16,
    pub code: &'a str,
    pub message: &'a str,
}
