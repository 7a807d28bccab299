//! Table of bundled images, built once by scanning the site root.

use std::collections::BTreeMap;
use std::path::{
    Component,
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use crate::config::AssetMatcher;

/// A bundled image file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetHandle {
    /// Path relative to the site root, `/`-separated (e.g. `assets/team/ana.jpg`).
    pub logical_path: String,
    /// Location of the file on disk.
    pub source_path: PathBuf,
}

impl AssetHandle {
    /// URL of the asset in the built site.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/{}", self.logical_path)
    }
}

/// Immutable lookup table of bundled images, keyed by logical path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCatalog {
    /// Assets keyed by logical path.
    assets: BTreeMap<String, AssetHandle>,
}

impl ImageCatalog {
    /// Scans the site root for files selected by `matcher`.
    ///
    /// Unreadable directory entries are skipped.
    #[must_use]
    pub fn scan(matcher: &AssetMatcher) -> Self {
        let site_root = matcher.site_root();
        tracing::debug!(site_root = %site_root.display(), "Scanning asset catalog");

        let mut assets = BTreeMap::new();
        for result in WalkBuilder::new(site_root)
            .hidden(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let Ok(relative_path) = path.strip_prefix(site_root) else {
                continue;
            };
            if !matcher.is_asset_relative(relative_path) {
                continue;
            }

            let logical_path = logical_path(relative_path);
            assets.insert(
                logical_path.clone(),
                AssetHandle { logical_path, source_path: path.to_path_buf() },
            );
        }

        tracing::debug!(count = assets.len(), "Asset catalog ready");
        Self { assets }
    }

    /// Builds a catalog from logical paths resolved against `site_root`.
    #[must_use]
    pub fn from_paths<I, S>(site_root: &Path, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let assets = paths
            .into_iter()
            .map(|path| {
                let logical_path = path.as_ref().trim_start_matches('/').to_string();
                let source_path = site_root.join(&logical_path);
                (logical_path.clone(), AssetHandle { logical_path, source_path })
            })
            .collect();

        Self { assets }
    }

    /// Looks up an asset by its exact logical path.
    #[must_use]
    pub fn get(&self, logical_path: &str) -> Option<&AssetHandle> {
        self.assets.get(logical_path)
    }

    /// Assets in logical path order.
    pub fn iter(&self) -> impl Iterator<Item = &AssetHandle> {
        self.assets.values()
    }

    /// Number of cataloged assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// True when no asset was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// `assets/team/a.png` style path with forward slashes.
fn logical_path(relative_path: &Path) -> String {
    relative_path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use tempfile::TempDir;

    use super::*;
    use crate::config::SiteSettings;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"img").unwrap();
    }

    #[googletest::test]
    fn test_scan_collects_matching_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "assets/event-workshop.jpg");
        touch(root, "assets/team/member1.png");
        touch(root, "assets/readme.txt");
        touch(root, "dist/assets/old.png");
        touch(root, "src/logo.png");
        let matcher = AssetMatcher::new(root.to_path_buf(), &SiteSettings::default()).unwrap();

        let catalog = ImageCatalog::scan(&matcher);

        expect_that!(
            catalog.iter().map(|asset| asset.logical_path.as_str()).collect::<Vec<_>>(),
            elements_are![eq(&"assets/event-workshop.jpg"), eq(&"assets/team/member1.png")]
        );
        expect_that!(
            catalog.get("assets/team/member1.png").map(|asset| asset.source_path.clone()),
            some(eq(&root.join("assets/team/member1.png")))
        );
    }

    #[googletest::test]
    fn test_scan_empty_site() {
        let temp_dir = TempDir::new().unwrap();
        let matcher =
            AssetMatcher::new(temp_dir.path().to_path_buf(), &SiteSettings::default()).unwrap();

        let catalog = ImageCatalog::scan(&matcher);

        expect_that!(catalog.is_empty(), eq(true));
    }

    #[googletest::test]
    fn test_from_paths_and_href() {
        let catalog = ImageCatalog::from_paths(Path::new("/site"), ["/assets/logo.svg"]);

        let asset = catalog.get("assets/logo.svg").unwrap();

        expect_that!(asset.href(), eq("/assets/logo.svg"));
        expect_that!(asset.source_path, eq(&PathBuf::from("/site/assets/logo.svg")));
        expect_that!(catalog.len(), eq(1));
    }
}
