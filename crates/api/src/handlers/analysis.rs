//! Handlers for single-text and batch-file sentiment analysis.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use moodlens_classifier::SentimentClassifier;
use moodlens_core::error::CoreError;
use moodlens_core::language::Language;
use moodlens_core::sentiment::AnalysisResult;
use moodlens_core::upload::{non_blank_lines, sanitize_filename};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::session::{self, CurrentUser};
use crate::state::AppState;
use crate::views::{render, ResultPage};

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Form body for `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    pub text: String,
}

/// POST /analyze
///
/// Classifies one piece of text with the session's language model and
/// renders the localized label. Blank input goes back to the home page.
pub async fn analyze(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(input): Form<AnalyzeForm>,
) -> AppResult<Response> {
    let text = input.text.trim();
    if text.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    let language = session::current_language(&current.session).await?;
    let result = classify(state.classifiers.get(language), language, text).await?;

    tracing::info!(
        user_id = current.user.user_id,
        %language,
        sentiment = %result.sentiment,
        score = result.score,
        "Text analyzed"
    );

    Ok(render(&ResultPage::new(language, None, &[result]))?.into_response())
}

/// POST /upload
///
/// Saves the uploaded file under the upload directory (same name overwrites)
/// and classifies every non-blank line. A missing file or empty filename goes
/// back to the home page; a file that is not UTF-8 text fails the whole batch.
pub async fn upload(
    State(state): State<AppState>,
    current: CurrentUser,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let mut received = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(multipart_error)?;
        received = Some((filename, data));
        break;
    }

    let Some((filename, data)) = received.filter(|(name, _)| !name.is_empty()) else {
        return Ok(Redirect::to("/").into_response());
    };

    let safe_name = sanitize_filename(&filename).ok_or_else(|| {
        CoreError::Validation(format!("'{filename}' is not a usable file name"))
    })?;
    let path = state.config.upload_dir.join(&safe_name);

    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to save upload: {e}")))?;
    tracing::info!(
        user_id = current.user.user_id,
        path = %path.display(),
        bytes = data.len(),
        "Upload saved"
    );

    let content = std::str::from_utf8(&data).map_err(|e| {
        CoreError::Validation(format!("'{safe_name}' is not valid UTF-8 text: {e}"))
    })?;

    let language = session::current_language(&current.session).await?;
    let classifier = state.classifiers.get(language);

    let mut results = Vec::new();
    for line in non_blank_lines(content) {
        results.push(classify(classifier, language, line).await?);
    }

    tracing::info!(
        user_id = current.user.user_id,
        %language,
        lines = results.len(),
        "Batch analyzed"
    );

    Ok(render(&ResultPage::new(language, Some(safe_name), &results))?.into_response())
}

/// Keep the body-limit status from the multipart reader; anything else is a
/// malformed request.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

/// Run one classification and localize its label.
async fn classify(
    classifier: &dyn SentimentClassifier,
    language: Language,
    text: &str,
) -> AppResult<AnalysisResult> {
    let prediction = classifier.classify(text).await?;
    Ok(AnalysisResult::new(
        text,
        &prediction.label,
        prediction.score,
        language,
    ))
}
