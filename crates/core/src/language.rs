//! Supported analysis languages.
//!
//! Each language selects its own sentiment model and its own display strings.
//! The set is closed: anything outside it is rejected at the boundary instead
//! of failing later during classifier dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Session code for Turkish.
pub const LANGUAGE_TURKISH: &str = "turkish";
/// Session code for English.
pub const LANGUAGE_ENGLISH: &str = "english";

/// A language the analyzer can classify text in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Default when the session has no preference stored.
    #[default]
    Turkish,
    English,
}

impl Language {
    /// Every supported language, in the order the UI lists them.
    pub const ALL: [Language; 2] = [Language::Turkish, Language::English];

    /// Parse a language code as submitted by the language form.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(code: &str) -> Result<Self, CoreError> {
        match code.trim().to_ascii_lowercase().as_str() {
            LANGUAGE_TURKISH => Ok(Language::Turkish),
            LANGUAGE_ENGLISH => Ok(Language::English),
            other => Err(CoreError::Validation(format!(
                "Unsupported language '{other}'. Expected one of: {LANGUAGE_TURKISH}, {LANGUAGE_ENGLISH}"
            ))),
        }
    }

    /// The lowercase code stored in the session and used in forms.
    pub fn code(self) -> &'static str {
        match self {
            Language::Turkish => LANGUAGE_TURKISH,
            Language::English => LANGUAGE_ENGLISH,
        }
    }

    /// Human-readable name, written in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Turkish => "Türkçe",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
