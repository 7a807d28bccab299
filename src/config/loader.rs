//! Settings file loading.

use std::path::Path;

use super::{
    CONFIG_FILE_NAME,
    ConfigError,
    SiteSettings,
};

/// Loads settings from the site root.
///
/// Looks for the `.chapter-site.json` file.
///
/// # Arguments
/// * `site_root` - Root directory of the site sources
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and was parsed
/// - `Ok(None)`: no settings file
/// - `Err(ConfigError)`: read or parse failure
pub(super) fn load_from_site_root(site_root: &Path) -> Result<Option<SiteSettings>, ConfigError> {
    let config_path = site_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: SiteSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
