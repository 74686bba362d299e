//! Sentiment classification backends.
//!
//! - [`SentimentClassifier`] -- the seam handlers call through.
//! - [`api::HttpClassifier`] -- hosted inference endpoint client.
//! - [`registry::ClassifierRegistry`] -- one classifier per [`Language`],
//!   built once at startup.
//!
//! [`Language`]: moodlens_core::language::Language

pub mod api;
pub mod config;
pub mod registry;

use async_trait::async_trait;
use serde::Deserialize;

/// A single label/confidence pair returned by a model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    /// Raw model label, e.g. `"POSITIVE"`.
    pub label: String,
    /// Model confidence for `label`, nominally in `[0, 1]`.
    pub score: f64,
}

/// Errors from a classification backend.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The inference endpoint returned a non-2xx status code.
    #[error("Inference API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The endpoint answered but returned no candidate labels.
    #[error("Inference API returned no predictions")]
    EmptyResponse,
}

/// Anything that can turn a piece of text into a sentiment prediction.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify `text`, returning the most likely label.
    async fn classify(&self, text: &str) -> Result<Prediction, ClassifierError>;
}
