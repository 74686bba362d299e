//! Sentiment labels, their localized display strings, and per-text results.
//!
//! Classifiers return free-form label strings. They are folded into
//! [`SentimentLabel`] here so that translation is a total function: any label
//! outside the known set becomes [`SentimentLabel::Unknown`] and renders as
//! `"Unknown"` in every language.

use crate::language::Language;

/// Raw classifier label for positive polarity.
pub const LABEL_POSITIVE: &str = "POSITIVE";
/// Raw classifier label for negative polarity.
pub const LABEL_NEGATIVE: &str = "NEGATIVE";
/// Display string for labels outside the known set.
pub const LABEL_UNKNOWN_DISPLAY: &str = "Unknown";

/// Polarity reported by a classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    /// Any label the localization table does not cover, kept verbatim.
    Unknown(String),
}

impl SentimentLabel {
    /// Fold a raw classifier label into a known variant.
    ///
    /// Matching is case-insensitive since models differ in how they spell
    /// their labels (`POSITIVE` vs `positive`).
    pub fn from_raw(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case(LABEL_POSITIVE) {
            SentimentLabel::Positive
        } else if trimmed.eq_ignore_ascii_case(LABEL_NEGATIVE) {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Unknown(label.to_string())
        }
    }

    /// Display string for this label in the given language.
    pub fn localize(&self, language: Language) -> &'static str {
        match (self, language) {
            (SentimentLabel::Positive, Language::Turkish) => "Pozitif",
            (SentimentLabel::Negative, Language::Turkish) => "Negatif",
            (SentimentLabel::Positive, Language::English) => "Positive",
            (SentimentLabel::Negative, Language::English) => "Negative",
            (SentimentLabel::Unknown(_), _) => LABEL_UNKNOWN_DISPLAY,
        }
    }
}

/// Round a confidence score to two decimal places, clamped into `[0, 1]`.
///
/// Non-finite input (NaN, infinities) yields `0.0`.
pub fn round_score(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    let clamped = score.clamp(0.0, 1.0);
    (clamped * 100.0).round() / 100.0
}

/// Classification outcome for a single piece of text, ready for rendering.
///
/// Not persisted; produced per request and discarded after the response.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// The text that was classified.
    pub text: String,
    /// Localized label (e.g. `"Pozitif"`).
    pub sentiment: String,
    /// Label exactly as the classifier returned it.
    pub raw_label: String,
    /// Confidence rounded to two decimals, always within `[0, 1]`.
    pub score: f64,
}

impl AnalysisResult {
    /// Build a result from a raw classifier prediction.
    pub fn new(text: impl Into<String>, raw_label: &str, score: f64, language: Language) -> Self {
        Self {
            text: text.into(),
            sentiment: SentimentLabel::from_raw(raw_label).localize(language).to_string(),
            raw_label: raw_label.to_string(),
            score: round_score(score),
        }
    }

    /// The score formatted with exactly two decimals (`0.5` -> `"0.50"`).
    pub fn score_display(&self) -> String {
        format!("{:.2}", self.score)
    }
}
