//! Asset file pattern matcher.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::SiteSettings;

/// Errors building an [`AssetMatcher`].
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    /// An entry of `assetPatterns` is not a valid glob.
    #[error("Invalid asset pattern '{pattern}': {source}")]
    InvalidAssetPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// An entry of `excludePatterns` is not a valid glob.
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The compiled glob set could not be built.
    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches site files against the configured asset globs.
#[derive(Debug, Clone)]
pub struct AssetMatcher {
    /// Root the matched paths are relative to.
    site_root: PathBuf,
    /// Compiled `assetPatterns`.
    asset_set: GlobSet,
    /// Compiled `excludePatterns`.
    exclude_set: GlobSet,
}

impl AssetMatcher {
    /// Creates a new matcher from settings.
    pub fn new(site_root: PathBuf, settings: &SiteSettings) -> Result<Self, MatcherError> {
        let asset_set = Self::build_glob_set(&settings.asset_patterns, |pattern, source| {
            MatcherError::InvalidAssetPattern { pattern, source }
        })?;

        let exclude_set = Self::build_glob_set(&settings.exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        Ok(Self { site_root, asset_set, exclude_set })
    }

    /// Compiles `patterns`, mapping the first invalid one through `make_error`.
    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Site root the patterns apply to.
    #[must_use]
    pub fn site_root(&self) -> &Path {
        &self.site_root
    }

    /// Returns true if the path matches `assetPatterns` but not `excludePatterns`.
    ///
    /// The path must be relative to the site root.
    #[must_use]
    pub fn is_asset_relative(&self, relative_path: &Path) -> bool {
        self.asset_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn create_settings(assets: &[&str], exclude: &[&str]) -> SiteSettings {
        SiteSettings {
            asset_patterns: assets.iter().copied().map(String::from).collect(),
            exclude_patterns: exclude.iter().copied().map(String::from).collect(),
            ..SiteSettings::default()
        }
    }

    #[rstest]
    fn is_asset_with_default_patterns() {
        let matcher = AssetMatcher::new(PathBuf::from("/site"), &SiteSettings::default())
            .expect("valid patterns");

        assert!(matcher.is_asset_relative(Path::new("assets/event-workshop.jpg")));
        assert!(matcher.is_asset_relative(Path::new("assets/team/member1.png")));
        assert!(matcher.is_asset_relative(Path::new("assets/logo.svg")));
        assert!(matcher.is_asset_relative(Path::new("assets/banner.webp")));

        assert!(!matcher.is_asset_relative(Path::new("assets/notes.txt")));
        assert!(!matcher.is_asset_relative(Path::new("public/logo.png")));
    }

    #[rstest]
    fn is_asset_with_exclude_patterns() {
        let settings = create_settings(&["**/*.png"], &["dist/**", "**/drafts/**"]);
        let matcher = AssetMatcher::new(PathBuf::from("/site"), &settings).expect("valid patterns");

        assert!(matcher.is_asset_relative(Path::new("assets/a.png")));
        assert!(!matcher.is_asset_relative(Path::new("dist/assets/a.png")));
        assert!(!matcher.is_asset_relative(Path::new("assets/drafts/a.png")));
    }

    #[rstest]
    fn new_with_invalid_asset_pattern() {
        let settings = create_settings(&["assets/*.{png"], &[]);

        let result = AssetMatcher::new(PathBuf::from("/site"), &settings);

        assert!(matches!(result.unwrap_err(), MatcherError::InvalidAssetPattern { .. }));
    }

    #[rstest]
    fn new_with_invalid_exclude_pattern() {
        let settings = create_settings(&["**/*.png"], &["[invalid"]);

        let result = AssetMatcher::new(PathBuf::from("/site"), &settings);

        assert!(matches!(result.unwrap_err(), MatcherError::InvalidExcludePattern { .. }));
    }

    #[rstest]
    fn site_root_accessor() {
        let matcher = AssetMatcher::new(PathBuf::from("/site"), &SiteSettings::default())
            .expect("valid patterns");

        assert_eq!(matcher.site_root(), Path::new("/site"));
    }
}
