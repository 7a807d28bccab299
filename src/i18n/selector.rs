//! Active-language state and its durable storage.

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::fmt::Debug;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::{
    Arc,
    Mutex,
};

use thiserror::Error;

use crate::types::Language;

/// Storage key holding the persisted language code.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Errors reading or writing a [`LanguageStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The state file could not be read or written.
    #[error("Failed to access state file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state file holds something other than a string map.
    #[error("State file {path:?} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A thread panicked while holding the in-memory store.
    #[error("State store lock was poisoned")]
    Poisoned,
}

/// Durable string key-value storage.
pub trait LanguageStore: Debug + Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    /// Returns an error when the underlying storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the underlying storage cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Key-value store backed by a JSON object file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a reader never observes a half-written file.
#[derive(Debug, Clone)]
pub struct FileLanguageStore {
    /// Location of the JSON state file.
    path: PathBuf,
}

impl FileLanguageStore {
    /// Store backed by the JSON file at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the state file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored entry; a missing file is empty.
    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => return Err(StoreError::Io { path: self.path.clone(), source }),
        };

        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&text)
            .map_err(|source| StoreError::Corrupt { path: self.path.clone(), source })
    }

    /// Wraps an IO error with the state file path.
    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }
}

impl LanguageStore for FileLanguageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StoreError::Corrupt { .. }) => {
                tracing::warn!("Replacing unreadable state file: {:?}", self.path);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let text = serde_json::to_string_pretty(&entries)
            .map_err(|source| StoreError::Corrupt { path: self.path.clone(), source })?;
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, text).map_err(|e| self.io_error(e))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(key, value, "Persisted state entry to {:?}", self.path);
        Ok(())
    }
}

/// In-memory store. Clones share the same entries, which lets tests observe
/// what a selector persisted and hand it to a fresh selector.
#[derive(Debug, Clone, Default)]
pub struct MemoryLanguageStore {
    /// Entries shared between clones.
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryLanguageStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguageStore for MemoryLanguageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Sole owner of the active language.
///
/// Every change goes through [`LanguageSelector::set_active_language`], which
/// updates the in-memory value and then persists it. Both steps happen under
/// `&mut self`, so no other writer can interleave.
#[derive(Debug)]
pub struct LanguageSelector {
    /// Where the choice is persisted.
    store: Box<dyn LanguageStore>,
    /// Language currently in effect.
    active: Language,
}

impl LanguageSelector {
    /// Reads the persisted choice, falling back to `default` when it is
    /// missing, unreadable, or not a supported code.
    pub fn initialize(store: Box<dyn LanguageStore>, default: Language) -> Self {
        let active = match store.read(LANGUAGE_STORAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                tracing::warn!(code = %code, "Ignoring unsupported persisted language");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                tracing::warn!("Failed to read persisted language: {}", e);
                default
            }
        };

        tracing::debug!(language = %active, "Initialized active language");
        Self { store, active }
    }

    /// Language currently in effect.
    #[must_use]
    pub const fn active_language(&self) -> Language {
        self.active
    }

    /// Sets the active language from a code.
    ///
    /// # Returns
    /// The new active language, or `None` when `code` is not supported (the
    /// state is left untouched).
    pub fn set_active_language(&mut self, code: &str) -> Option<Language> {
        let Some(language) = Language::from_code(code) else {
            tracing::debug!(code, "Ignoring unsupported language code");
            return None;
        };

        self.set_language(language);
        Some(language)
    }

    /// Updates the active language and persists it.
    ///
    /// A failed write is logged; the in-memory change stands.
    pub fn set_language(&mut self, language: Language) {
        self.active = language;

        if let Err(e) = self.store.write(LANGUAGE_STORAGE_KEY, language.code()) {
            tracing::warn!(language = %language, "Failed to persist language: {}", e);
        }
    }
}
