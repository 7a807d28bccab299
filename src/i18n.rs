//! Translation lookup and the active-language selector.

pub mod selector;
pub mod translator;

pub use selector::{
    FileLanguageStore,
    LANGUAGE_STORAGE_KEY,
    LanguageSelector,
    LanguageStore,
    MemoryLanguageStore,
    StoreError,
};
pub use translator::{
    Translator,
    translate,
};
