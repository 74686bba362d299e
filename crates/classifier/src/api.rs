//! HTTP client for a hosted text-classification inference API.
//!
//! Wraps the `POST /models/{model}` endpoint using [`reqwest`]. The endpoint
//! answers either with a flat list of candidates or with one list per input;
//! both shapes are accepted and the highest-scoring candidate wins.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{ClassifierError, Prediction, SentimentClassifier};

/// Inference response body, in either of the shapes the API produces.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    /// `[[{label, score}, ...]]` -- one candidate list per input.
    Nested(Vec<Vec<Prediction>>),
    /// `[{label, score}, ...]`
    Flat(Vec<Prediction>),
}

impl InferenceResponse {
    /// Pick the highest-scoring candidate for the first input.
    fn into_best(self) -> Option<Prediction> {
        let candidates = match self {
            InferenceResponse::Nested(mut outer) => {
                if outer.is_empty() {
                    return None;
                }
                outer.swap_remove(0)
            }
            InferenceResponse::Flat(list) => list,
        };
        candidates
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

/// HTTP client for a single hosted sentiment model.
pub struct HttpClassifier {
    client: reqwest::Client,
    model_url: String,
    api_token: Option<String>,
}

impl HttpClassifier {
    /// Create a client for `model` served under `endpoint`.
    ///
    /// * `endpoint` - Base URL, e.g. `https://api-inference.huggingface.co`.
    /// * `model` - Model id, e.g. `distilbert-base-uncased-finetuned-sst-2-english`.
    pub fn new(endpoint: &str, model: &str, api_token: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, model, api_token)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across several models).
    pub fn with_client(
        client: reqwest::Client,
        endpoint: &str,
        model: &str,
        api_token: Option<String>,
    ) -> Self {
        Self {
            client,
            model_url: format!("{}/models/{}", endpoint.trim_end_matches('/'), model),
            api_token,
        }
    }

    /// Full URL requests are sent to.
    pub fn model_url(&self) -> &str {
        &self.model_url
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClassifierError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClassifierError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl SentimentClassifier for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<Prediction, ClassifierError> {
        let body = serde_json::json!({ "inputs": text });

        let mut request = self.client.post(&self.model_url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = Self::ensure_success(request.send().await?).await?;
        let parsed: InferenceResponse = response.json().await?;
        let prediction = parsed.into_best().ok_or(ClassifierError::EmptyResponse)?;

        tracing::debug!(
            model_url = %self.model_url,
            label = %prediction.label,
            score = prediction.score,
            "Model output"
        );

        Ok(prediction)
    }
}
