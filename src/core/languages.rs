//! Locale identifiers accepted by the Chrome Web Store.
//!
//! See <https://developer.chrome.com/docs/webstore/i18n#choosing-locales-to-support>.

/// Every locale code the store accepts for `_locales/<code>/messages.json`.
///
/// Matching is exact and case-sensitive: `pt_BR` is supported, `pt-BR` and `pt_br` are not.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "am", "bg", "bn", "ca", "cs", "da", "de", "el", "en", "en_AU", "en_GB", "en_US", "es",
    "es_419", "et", "fa", "fi", "fil", "fr", "gu", "he", "hi", "hr", "hu", "id", "it", "ja", "kn",
    "ko", "lt", "lv", "ml", "mr", "ms", "nl", "no", "pl", "pt_BR", "pt_PT", "ro", "ru", "sk",
    "sl", "sr", "sv", "sw", "ta", "te", "th", "tr", "uk", "vi", "zh_CN", "zh_TW",
];

pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}
