use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::additions::MessageAddition;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const MESSAGE_KEYS: &[&str] = &["message", "msg", "m"];
pub const DESCRIPTION_KEYS: &[&str] = &["description", "desc", "d"];

/// Settings that drive a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default, alias = "onlySupportedLanguages")]
    pub enforce_supported_languages: bool,
    /// Field names accepted for a message, e.g. `message`, `msg`, `m`.
    #[serde(default = "default_message_keys", alias = "messageAliasKeys")]
    pub message_keys: Vec<String>,
    /// Field names accepted for a description, e.g. `description`, `desc`, `d`.
    #[serde(default = "default_description_keys", alias = "descriptionAliasKeys")]
    pub description_keys: Vec<String>,
    #[serde(default)]
    pub message_additions: IndexMap<String, MessageAddition>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_message_keys() -> Vec<String> {
    MESSAGE_KEYS.iter().map(|k| k.to_string()).collect()
}

fn default_description_keys() -> Vec<String> {
    DESCRIPTION_KEYS.iter().map(|k| k.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            enforce_supported_languages: false,
            message_keys: default_message_keys(),
            description_keys: default_description_keys(),
            message_additions: IndexMap::new(),
        }
    }
}

impl Settings {
    /// True if `key` names a message or description field rather than a language.
    pub fn is_alias_key(&self, key: &str) -> bool {
        self.message_keys.iter().any(|k| k == key) || self.description_keys.iter().any(|k| k == key)
    }
}
