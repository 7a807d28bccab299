//! Core types used throughout the project.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};
use thiserror::Error;

/// Display language of the site.
///
/// `Es` is the default whenever no valid choice is available.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
/// A supported site language.
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish, the default.
    #[default]
    Es,
    /// English.
    En,
}

/// A language code that is not supported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language code '{0}' (expected one of: es, en)")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Self; 2] = [Self::Es, Self::En];

    /// Two-letter code used in URLs and storage.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parses a language code. Only the exact codes `es` and `en` are accepted
    /// (surrounding whitespace is ignored).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Parses an optional code, falling back to the default language.
    #[must_use]
    pub fn from_code_or_default(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or_default()
    }

    /// Name of the language in itself.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "English",
        }
    }

    /// Flag shown in the language switch.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Es => "🇪🇸",
            Self::En => "🇬🇧",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// Stable identifier of a content record.
///
/// Data files use numbers or strings; both are kept as their decimal/text form
/// so that lookups by route segment compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Id from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Which half of a content category a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Not yet held.
    Upcoming,
    /// Already held.
    Past,
}

impl Period {
    /// True for [`Period::Past`].
    #[must_use]
    pub const fn is_past(self) -> bool {
        matches!(self, Self::Past)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::spanish("es", Some(Language::Es))]
    #[case::english("en", Some(Language::En))]
    #[case::padded(" en ", Some(Language::En))]
    #[case::french("fr", None)]
    #[case::uppercase("ES", None)]
    #[case::region("en-US", None)]
    #[case::empty("", None)]
    fn test_from_code(#[case] code: &str, #[case] expected: Option<Language>) {
        assert_that!(Language::from_code(code), eq(expected));
    }

    #[rstest]
    fn test_default_language_is_spanish() {
        assert_that!(Language::default(), eq(Language::Es));
        assert_that!(Language::from_code_or_default(None), eq(Language::Es));
        assert_that!(Language::from_code_or_default(Some("xx")), eq(Language::Es));
        assert_that!(Language::from_code_or_default(Some("en")), eq(Language::En));
    }

    #[rstest]
    fn test_from_str_error_names_code() {
        let err = "fr".parse::<Language>().unwrap_err();

        assert_that!(err.to_string(), contains_substring("'fr'"));
    }

    #[rstest]
    #[case::number("7", "7")]
    #[case::string(r#""intro-course""#, "intro-course")]
    fn test_record_id_deserialize(#[case] json: &str, #[case] expected: &str) {
        let id: RecordId = serde_json::from_str(json).unwrap();

        assert_that!(id.as_str(), eq(expected));
    }

    #[rstest]
    fn test_record_id_number_equals_route_segment() {
        let from_json: RecordId = serde_json::from_str("12").unwrap();

        assert_that!(from_json, eq(&RecordId::from("12")));
    }
}
