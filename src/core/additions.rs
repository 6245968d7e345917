//! Per-key message suffixes.
//!
//! Configured as `messageAdditions`, either a literal suffix for every language or a
//! map of suffixes per language:
//!
//! ```json
//! {
//!   "extName": " (beta)",
//!   "extDescription": { "en": " Free.", "uk": " Безкоштовно." }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MessageAddition {
    Suffix(String),
    PerLanguage(IndexMap<String, String>),
}

impl MessageAddition {
    /// Suffix for `language`, falling back to the default language's suffix.
    fn suffix_for(&self, language: &str, default_language: &str) -> Option<&str> {
        match self {
            MessageAddition::Suffix(suffix) => Some(suffix.as_str()),
            MessageAddition::PerLanguage(by_language) => by_language
                .get(language)
                .or_else(|| by_language.get(default_language))
                .map(String::as_str),
        }
    }
}

/// Append the configured suffix for `key` in `language` to `message`.
pub fn augment(
    additions: &IndexMap<String, MessageAddition>,
    default_language: &str,
    key: &str,
    language: &str,
    message: &str,
) -> String {
    match additions
        .get(key)
        .and_then(|addition| addition.suffix_for(language, default_language))
    {
        Some(suffix) => format!("{message}{suffix}"),
        None => message.to_string(),
    }
}
