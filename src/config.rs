//! Site configuration.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Asset file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use matcher::{
    AssetMatcher,
    MatcherError,
};
pub use types::{
    BuildConfig,
    CONFIG_FILE_NAME,
    ConfigError,
    ContactConfig,
    ExternalLink,
    SiteSettings,
    ValidationError,
};
