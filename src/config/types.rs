//! Settings file model and its validation.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::Language;

/// Name of the settings file looked up in the site root.
pub const CONFIG_FILE_NAME: &str = ".chapter-site.json";

/// One problem found by [`SiteSettings::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "assetPatterns[0]")
    pub field_path: String,
    /// What is wrong with the field.
    pub message: String,
}

impl ValidationError {
    /// Creates an error for `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Errors loading `.chapter-site.json`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Every problem found while validating the settings.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file could not be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid JSON for [`SiteSettings`].
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered list, one error per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of `.chapter-site.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Brand shown in the header and document titles.
    pub site_name: String,

    /// Dictionary file (`{ "es": {...}, "en": {...} }`), relative to the site root.
    pub dictionary_file: String,

    /// Directory holding the content data files, relative to the site root.
    pub data_dir: String,

    /// Globs (relative to the site root) selecting bundled images.
    pub asset_patterns: Vec<String>,
    /// Globs removed from the asset catalog.
    pub exclude_patterns: Vec<String>,

    /// Used when no valid language has been persisted.
    pub default_language: String,

    /// Key-value state file holding the persisted `language` entry.
    pub state_file: String,

    /// Directory `build` writes to.
    pub output_dir: String,

    /// Build pipeline tuning.
    pub build: BuildConfig,
    /// Contact details for the contact page and footer.
    pub contact: ContactConfig,

    /// External link rendered next to the navigation.
    pub partner_link: Option<ExternalLink>,
}

/// `build` section of the settings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    /// Maximum number of files written at once.
    /// Default: 80% of CPU cores (minimum 1).
    pub concurrency: Option<usize>,
}

impl BuildConfig {
    /// Configured concurrency, or 80% of the CPU cores (at least 1).
    #[must_use]
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.unwrap_or_else(|| (num_cpus::get() * 4 / 5).max(1))
    }
}

/// Chapter contact details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactConfig {
    /// Address for `mailto:` links.
    pub email: String,
    /// Phone number; hidden when empty.
    pub phone: String,
    /// Street address lines shown under the translated location name.
    pub address_lines: Vec<String>,
    /// Embeddable map URL.
    pub map_url: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "laspalmas@best-eu.org".to_string(),
            phone: "+34 123 456 789".to_string(),
            address_lines: vec!["35017 Las Palmas de Gran Canaria".to_string()],
            map_url: Some(
                "https://www.google.com/maps?q=EITE+ULPGC&ll=28.073465,-15.452362&z=17&output=embed"
                    .to_string(),
            ),
        }
    }
}

/// Label and target of an external link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLink {
    /// Link text.
    pub label: String,
    /// Link target.
    pub href: String,
}

impl SiteSettings {
    /// Parsed default language. Falls back to `es` when the configured value is
    /// not a supported code (validation reports that case separately).
    #[must_use]
    pub fn default_language(&self) -> Language {
        Language::from_code_or_default(Some(&self.default_language))
    }

    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Unsupported default language
    /// - Zero build concurrency
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let required = [
            ("siteName", &self.site_name),
            ("dictionaryFile", &self.dictionary_file),
            ("dataDir", &self.data_dir),
            ("stateFile", &self.state_file),
            ("outputDir", &self.output_dir),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(field, "The value cannot be empty"));
            }
        }

        if self.asset_patterns.is_empty() {
            errors.push(ValidationError::new(
                "assetPatterns",
                "At least one pattern is required. Example: [\"assets/**/*.{png,jpg}\"]",
            ));
        }

        for (index, pattern) in self.asset_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("assetPatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if Language::from_code(&self.default_language).is_none() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                format!(
                    "Unsupported language '{}'. Supported languages: es, en",
                    self.default_language
                ),
            ));
        }

        if self.build.concurrency == Some(0) {
            errors.push(ValidationError::new(
                "build.concurrency",
                "Concurrency must be at least 1, or removed to use the default",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "BEST Las Palmas".to_string(),
            dictionary_file: "locales/dictionary.json".to_string(),
            data_dir: "settings".to_string(),
            asset_patterns: vec!["assets/**/*.{png,jpg,jpeg,svg,webp}".to_string()],
            exclude_patterns: vec!["node_modules/**".to_string(), "dist/**".to_string()],
            default_language: Language::default().code().to_string(),
            state_file: ".chapter-site/state.json".to_string(),
            output_dir: "dist".to_string(),
            build: BuildConfig::default(),
            contact: ContactConfig::default(),
            partner_link: Some(ExternalLink {
                label: "BEST International".to_string(),
                href: "https://www.best.eu.org".to_string(),
            }),
        }
    }
}
