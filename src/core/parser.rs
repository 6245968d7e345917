//! Turns one source entry into locale items.
//!
//! Supported shapes:
//!
//! ```yaml
//! plain: Applies to the default language
//! described:
//!   message: Default-language message
//!   description: Shown to translators
//! per_language:
//!   description: Shared by every language below
//!   en: Hello
//!   uk: Привіт
//! overrides:
//!   m: Shared message
//!   en: { d: English-only description }
//!   uk: { msg: Власне повідомлення }
//! ```

use super::{
    alias,
    settings::Settings,
    tree::{SourceValue, ValueNode},
};

/// One parsed message. `language: None` targets the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleItem {
    pub key: String,
    pub message: String,
    pub description: Option<String>,
    pub language: Option<String>,
}

impl LocaleItem {
    fn new(key: &str, message: &str, description: Option<&str>, language: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            message: message.to_string(),
            description: description.map(str::to_string),
            language: language.map(str::to_string),
        }
    }
}

pub struct KeyParser<'a> {
    settings: &'a Settings,
}

impl<'a> KeyParser<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Parse a single `(key, value)` pair of the source tree.
    ///
    /// The default-language item (if any) comes first, followed by per-language items
    /// in the node's declared order. Shapes that carry no message produce nothing.
    pub fn parse(&self, key: &str, value: &SourceValue) -> Vec<LocaleItem> {
        match value {
            SourceValue::Scalar(message) => vec![LocaleItem::new(key, message, None, None)],
            SourceValue::Node(node) => self.parse_node(key, node),
            SourceValue::Unsupported => Vec::new(),
        }
    }

    fn parse_node(&self, key: &str, node: &ValueNode) -> Vec<LocaleItem> {
        let message = self.message(node);
        let description = self.description(node);
        let mut items = Vec::new();

        if let Some(message) = message
            && !node.contains_key(&self.settings.default_language)
        {
            items.push(LocaleItem::new(key, message, description, None));
        }

        for (language, value) in node {
            if self.settings.is_alias_key(language) {
                continue;
            }

            let (language_message, language_description) = match value {
                SourceValue::Scalar(s) => (non_empty(s), description),
                SourceValue::Node(sub) => (
                    self.message(sub).or(message),
                    self.description(sub).or(description),
                ),
                // Numbers, lists and nulls carry nothing of their own.
                SourceValue::Unsupported => (message, description),
            };

            if let Some(language_message) = language_message {
                items.push(LocaleItem::new(
                    key,
                    language_message,
                    language_description,
                    Some(language.as_str()),
                ));
            }
        }

        items
    }

    fn message<'n>(&self, node: &'n ValueNode) -> Option<&'n str> {
        alias::resolve(node, &self.settings.message_keys).and_then(non_empty)
    }

    fn description<'n>(&self, node: &'n ValueNode) -> Option<&'n str> {
        alias::resolve(node, &self.settings.description_keys).and_then(non_empty)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
