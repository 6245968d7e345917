//! Per-language catalog accumulation and backfill.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{error::ConvertError, languages::is_supported_language, settings::Settings};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleEntry {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Message key to entry, for one language.
pub type LocaleMessages = IndexMap<String, LocaleEntry>;

/// Language code to that language's messages, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocaleCatalog {
    languages: IndexMap<String, LocaleMessages>,
}

impl LocaleCatalog {
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn messages(&self, language: &str) -> Option<&LocaleMessages> {
        self.languages.get(language)
    }

    pub fn get(&self, language: &str, key: &str) -> Option<&LocaleEntry> {
        self.languages.get(language)?.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleMessages)> {
        self.languages.iter().map(|(lang, messages)| (lang.as_str(), messages))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// An entry copied into a language that had no translation of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfilledEntry {
    pub key: String,
    pub language: String,
    pub source_language: String,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub catalog: LocaleCatalog,
    pub backfilled: Vec<BackfilledEntry>,
}

/// Accumulates entries, then backfills them into a finished [`Conversion`].
///
/// Each step consumes the builder, so a finished catalog can never be fed again.
#[derive(Debug)]
pub struct CatalogBuilder<'a> {
    settings: &'a Settings,
    catalog: LocaleCatalog,
    /// Languages that have an entry for each key, in discovery order.
    key_languages: IndexMap<String, Vec<String>>,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            catalog: LocaleCatalog::default(),
            key_languages: IndexMap::new(),
        }
    }

    /// Set `catalog[language][key]`, overwriting any earlier entry.
    ///
    /// `language: None` means the default language. An empty description is dropped.
    pub fn insert(
        mut self,
        key: &str,
        message: &str,
        description: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self, ConvertError> {
        let language = language.unwrap_or(&self.settings.default_language);

        if self.settings.enforce_supported_languages && !is_supported_language(language) {
            return Err(ConvertError::UnsupportedLanguage {
                language: language.to_string(),
            });
        }

        trace!(key, language, "insert locale entry");

        let entry = LocaleEntry {
            message: message.to_string(),
            description: description.filter(|d| !d.is_empty()).map(str::to_string),
        };
        self.catalog
            .languages
            .entry(language.to_string())
            .or_default()
            .insert(key.to_string(), entry);

        let seen = self.key_languages.entry(key.to_string()).or_default();
        if !seen.iter().any(|l| l == language) {
            seen.push(language.to_string());
        }

        Ok(self)
    }

    /// Fill every missing (language, key) pair and return the finished catalog.
    ///
    /// The copy comes from the default language when the key has an entry there,
    /// otherwise from the first language the key was seen in.
    pub fn finish(self) -> Conversion {
        let Self {
            settings,
            mut catalog,
            key_languages,
        } = self;

        let languages: Vec<String> = catalog.languages.keys().cloned().collect();
        let mut backfilled = Vec::new();

        for (key, present) in &key_languages {
            if present.len() == languages.len() {
                continue;
            }

            let source_language = if present.contains(&settings.default_language) {
                &settings.default_language
            } else {
                &present[0]
            };
            let Some(entry) = catalog.get(source_language, key).cloned() else {
                continue;
            };

            for language in languages.iter().filter(|l| !present.contains(l)) {
                debug!(key = %key, language = %language, from = %source_language, "backfill");
                if let Some(messages) = catalog.languages.get_mut(language) {
                    messages.insert(key.clone(), entry.clone());
                }
                backfilled.push(BackfilledEntry {
                    key: key.clone(),
                    language: language.clone(),
                    source_language: source_language.clone(),
                });
            }
        }

        // Keep every language in source key order, backfilled keys included.
        for messages in catalog.languages.values_mut() {
            messages.sort_by(|a, _, b, _| {
                key_languages
                    .get_index_of(a)
                    .cmp(&key_languages.get_index_of(b))
            });
        }

        Conversion {
            catalog,
            backfilled,
        }
    }
}
