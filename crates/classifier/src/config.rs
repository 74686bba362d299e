use moodlens_core::language::Language;

/// Default hosted inference endpoint.
const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";
/// Default Turkish sentiment model.
const DEFAULT_TURKISH_MODEL: &str = "savasy/bert-base-turkish-sentiment-cased";
/// Default English sentiment model.
const DEFAULT_ENGLISH_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the hosted sentiment models.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Base URL of the inference API, without a trailing slash.
    pub endpoint: String,
    /// Optional bearer token sent with every request.
    pub api_token: Option<String>,
    /// Model id used for Turkish text.
    pub turkish_model: String,
    /// Model id used for English text.
    pub english_model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    /// Load classifier configuration from environment variables.
    ///
    /// | Env Var                    | Default                                            |
    /// |----------------------------|----------------------------------------------------|
    /// | `CLASSIFIER_ENDPOINT`      | `https://api-inference.huggingface.co`             |
    /// | `CLASSIFIER_API_TOKEN`     | unset                                              |
    /// | `CLASSIFIER_TURKISH_MODEL` | `savasy/bert-base-turkish-sentiment-cased`         |
    /// | `CLASSIFIER_ENGLISH_MODEL` | `distilbert-base-uncased-finetuned-sst-2-english`  |
    /// | `CLASSIFIER_TIMEOUT_SECS`  | `30`                                               |
    ///
    /// # Panics
    ///
    /// Panics if `CLASSIFIER_TIMEOUT_SECS` is not a valid `u64`.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("CLASSIFIER_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.into())
            .trim_end_matches('/')
            .to_string();

        let api_token = std::env::var("CLASSIFIER_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let turkish_model = std::env::var("CLASSIFIER_TURKISH_MODEL")
            .unwrap_or_else(|_| DEFAULT_TURKISH_MODEL.into());

        let english_model = std::env::var("CLASSIFIER_ENGLISH_MODEL")
            .unwrap_or_else(|_| DEFAULT_ENGLISH_MODEL.into());

        let timeout_secs: u64 = std::env::var("CLASSIFIER_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("CLASSIFIER_TIMEOUT_SECS must be a valid u64");

        Self {
            endpoint,
            api_token,
            turkish_model,
            english_model,
            timeout_secs,
        }
    }

    /// Model id configured for `language`.
    pub fn model_for(&self, language: Language) -> &str {
        match language {
            Language::Turkish => &self.turkish_model,
            Language::English => &self.english_model,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            turkish_model: DEFAULT_TURKISH_MODEL.to_string(),
            english_model: DEFAULT_ENGLISH_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
