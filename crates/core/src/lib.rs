//! Domain types shared by the MoodLens crates.
//!
//! Nothing in here performs I/O: languages, sentiment labels and their
//! localization, score rounding, and upload helpers are pure functions so the
//! HTTP and storage layers can be tested against them directly.

pub mod error;
pub mod language;
pub mod sentiment;
pub mod types;
pub mod upload;
