//! Language -> classifier mapping shared by all request handlers.

use std::sync::Arc;
use std::time::Duration;

use moodlens_core::language::Language;

use crate::api::HttpClassifier;
use crate::config::ClassifierConfig;
use crate::SentimentClassifier;

/// Immutable set of classifiers, one per supported [`Language`].
///
/// Built once at startup and shared behind an `Arc` in application state.
/// Lookup is total because [`Language`] is a closed enum.
#[derive(Clone)]
pub struct ClassifierRegistry {
    turkish: Arc<dyn SentimentClassifier>,
    english: Arc<dyn SentimentClassifier>,
}

impl ClassifierRegistry {
    /// Assemble a registry from explicit classifier instances.
    pub fn new(
        turkish: Arc<dyn SentimentClassifier>,
        english: Arc<dyn SentimentClassifier>,
    ) -> Self {
        Self { turkish, english }
    }

    /// Build HTTP-backed classifiers for every language from `config`.
    ///
    /// Both models share one connection pool.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let build = |language: Language| -> Arc<dyn SentimentClassifier> {
            let classifier = HttpClassifier::with_client(
                client.clone(),
                &config.endpoint,
                config.model_for(language),
                config.api_token.clone(),
            );
            tracing::info!(%language, model_url = %classifier.model_url(), "Classifier configured");
            Arc::new(classifier)
        };

        Ok(Self::new(build(Language::Turkish), build(Language::English)))
    }

    /// The classifier responsible for `language`.
    pub fn get(&self, language: Language) -> &dyn SentimentClassifier {
        match language {
            Language::Turkish => self.turkish.as_ref(),
            Language::English => self.english.as_ref(),
        }
    }
}
