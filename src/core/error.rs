use thiserror::Error;

/// Fatal conversion failures.
///
/// Malformed source shapes are not errors; they just produce no entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A language outside the supported table was about to be inserted
    /// while whitelist enforcement was on.
    #[error("language '{language}' is not supported by the Chrome Web Store")]
    UnsupportedLanguage { language: String },
}
