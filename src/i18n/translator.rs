//! Key lookup with fallback to the key itself.

use crate::input::dictionary::Dictionary;
use crate::types::Language;

/// Looks up `key` for `language`.
///
/// Returns the key unchanged when it is missing or its value is empty, so
/// missing translations show up as raw keys instead of blank text.
#[must_use]
pub fn translate<'a>(dictionary: &'a Dictionary, language: Language, key: &'a str) -> &'a str {
    match dictionary.get(language, key) {
        Some(text) if !text.is_empty() => text,
        _ => key,
    }
}

/// Translation context bound to one language.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    /// Dictionary searched.
    dictionary: &'a Dictionary,
    /// Language looked up.
    language: Language,
}

impl<'a> Translator<'a> {
    /// Translator for `language` over `dictionary`.
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, language: Language) -> Self {
        Self { dictionary, language }
    }

    /// Creates a translator from an unchecked language code.
    ///
    /// An unset or unsupported code selects the default language.
    #[must_use]
    pub fn for_code(dictionary: &'a Dictionary, code: Option<&str>) -> Self {
        Self::new(dictionary, Language::from_code_or_default(code))
    }

    /// Language looked up.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Dictionary searched.
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Translates `key` in the bound language.
    #[must_use]
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        translate(self.dictionary, self.language, key)
    }

    /// Translates `key` into an owned string.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.t(key).to_string()
    }

    /// Same translator, other language.
    #[must_use]
    pub const fn with_language(&self, language: Language) -> Self {
        Self::new(self.dictionary, language)
    }
}
