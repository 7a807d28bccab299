//! Owns the loaded settings and the site root they belong to.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    SiteSettings,
    loader,
};

/// Loads and holds the settings of one site root.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Settings in effect; defaults until [`ConfigManager::load_settings`] succeeds.
    current_settings: SiteSettings,
    /// Directory holding `.chapter-site.json` and the site sources.
    site_root: PathBuf,
}

impl ConfigManager {
    /// Creates a manager with default settings rooted at `site_root`.
    #[must_use]
    pub fn new(site_root: PathBuf) -> Self {
        Self { current_settings: SiteSettings::default(), site_root }
    }

    /// Loads and validates the settings file of the current site root.
    ///
    /// A missing settings file keeps the defaults.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation errors
    pub fn load_settings(&mut self) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for site root: {:?}", self.site_root);

        let settings = loader::load_from_site_root(&self.site_root)?.map_or_else(
            SiteSettings::default,
            |loaded| {
                tracing::debug!("Loaded site settings: {:?}", loaded);
                loaded
            },
        );

        self.update_settings(settings)
    }

    /// Replaces the current settings after validating them.
    pub fn update_settings(&mut self, new_settings: SiteSettings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// Settings in effect.
    #[must_use]
    pub const fn get_settings(&self) -> &SiteSettings {
        &self.current_settings
    }

    /// Site root all configured paths are relative to.
    #[must_use]
    pub fn site_root(&self) -> &Path {
        &self.site_root
    }

    /// Resolves a settings path against the site root.
    #[must_use]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.site_root.join(relative)
    }

    /// Absolute path of the dictionary file.
    #[must_use]
    pub fn dictionary_path(&self) -> PathBuf {
        self.resolve(&self.current_settings.dictionary_file)
    }

    /// Absolute path of the content data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.resolve(&self.current_settings.data_dir)
    }

    /// Absolute path of the language state file.
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.resolve(&self.current_settings.state_file)
    }

    /// Absolute path of the build output directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.current_settings.output_dir)
    }
}
