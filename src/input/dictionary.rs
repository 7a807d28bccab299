//! Dictionary Store: language code → flat key → localized text.

use std::collections::{
    BTreeSet,
    HashMap,
};
use std::path::{
    Path,
    PathBuf,
};

use jsonc_parser::ParseOptions;
use serde_json::Value;
use thiserror::Error;

use crate::types::Language;

/// Separator used when flattening nested dictionary objects.
pub const KEY_SEPARATOR: &str = ".";

/// Errors loading the dictionary file.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("Failed to read dictionary file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary file is not valid JSONC.
    #[error("Failed to parse dictionary: {0}")]
    Parse(String),

    /// The top-level value is not an object.
    #[error("Dictionary must be an object keyed by language code")]
    NotAnObject,
}

/// Immutable mapping from language to localized strings.
///
/// Keys are flat: nested objects in the source file are joined with `.`,
/// so `{"nav": {"home": "Inicio"}}` and `{"nav.home": "Inicio"}` are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Flattened entries per language.
    entries: HashMap<Language, HashMap<String, String>>,
}

impl Dictionary {
    /// Empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from `(language, key, value)` triples.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Language, K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut dictionary = Self::new();
        for (language, key, value) in entries {
            dictionary.insert(language, key, value);
        }
        dictionary
    }

    /// Adds or replaces one entry.
    pub fn insert(&mut self, language: Language, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(language).or_default().insert(key.into(), value.into());
    }

    /// Value of `key` in `language`.
    #[must_use]
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.entries.get(&language)?.get(key).map(String::as_str)
    }

    /// True when `key` is defined in `language`.
    #[must_use]
    pub fn contains_key(&self, language: Language, key: &str) -> bool {
        self.get(language, key).is_some()
    }

    /// Keys defined for `language`, sorted.
    #[must_use]
    pub fn keys(&self, language: Language) -> BTreeSet<&str> {
        self.entries
            .get(&language)
            .map(|keys| keys.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of keys defined for `language`.
    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.entries.get(&language).map_or(0, HashMap::len)
    }

    /// True when no language has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }

    /// Builds a dictionary from a parsed `{ "<code>": { ... } }` document.
    ///
    /// Unsupported language codes are skipped with a warning.
    pub fn from_json(json: &Value) -> Result<Self, DictionaryError> {
        let Value::Object(languages) = json else {
            return Err(DictionaryError::NotAnObject);
        };

        let mut dictionary = Self::new();
        for (code, table) in languages {
            let Some(language) = Language::from_code(code) else {
                tracing::warn!(code = %code, "Skipping unsupported language in dictionary");
                continue;
            };
            let keys = flatten_json(table, KEY_SEPARATOR, None);
            tracing::debug!(language = %language, keys = keys.len(), "Loaded dictionary table");
            dictionary.entries.entry(language).or_default().extend(keys);
        }

        Ok(dictionary)
    }
}

/// Parses dictionary text. Comments and trailing commas are accepted.
pub fn parse_dictionary(text: &str) -> Result<Dictionary, DictionaryError> {
    let json = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
        .map_err(|e| DictionaryError::Parse(e.to_string()))?
        .unwrap_or(Value::Object(serde_json::Map::new()));

    Dictionary::from_json(&json)
}

/// Loads the dictionary file.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, DictionaryError> {
    tracing::debug!("Loading dictionary from: {:?}", path);

    let text = std::fs::read_to_string(path)
        .map_err(|source| DictionaryError::Io { path: path.to_path_buf(), source })?;

    parse_dictionary(&text)
}

/// Flattens a nested JSON object into a dot-separated key map.
///
/// Array elements use `[index]` notation; non-string leaves are stored as
/// their JSON text.
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Collects string leaves of `value` under dotted keys.
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}
