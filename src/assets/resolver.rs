//! Image reference resolution.

use super::catalog::{
    AssetHandle,
    ImageCatalog,
};

/// Prefix every bundled logical path is normalized to.
const ASSET_PREFIX: &str = "assets/";

/// References shorter than this (in characters) are treated as literals,
/// e.g. an emoji avatar.
const LITERAL_MAX_CHARS: usize = 10;

/// A resolved image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// External URL, emoji, or other literal used as-is.
    Passthrough(String),
    /// A file from the asset catalog.
    Bundled(AssetHandle),
}

impl ImageSource {
    /// Value to place in an `src` attribute (or to print, for literals).
    #[must_use]
    pub fn src(&self) -> String {
        match self {
            Self::Passthrough(reference) => reference.clone(),
            Self::Bundled(asset) => asset.href(),
        }
    }

    /// True when the source can be loaded by an `<img>` element.
    #[must_use]
    pub fn is_loadable(&self) -> bool {
        match self {
            Self::Passthrough(reference) => is_external(reference),
            Self::Bundled(_) => true,
        }
    }
}

/// Resolves image references against an [`ImageCatalog`].
///
/// Resolution has no side effects beyond the warning on a miss, and
/// resolving the same reference twice yields the same source.
#[derive(Debug, Clone, Copy)]
pub struct ImageResolver<'a> {
    /// Catalog searched by [`ImageResolver::probe`].
    catalog: &'a ImageCatalog,
}

impl<'a> ImageResolver<'a> {
    /// Creates a resolver over `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a ImageCatalog) -> Self {
        Self { catalog }
    }

    /// Resolves `reference`, logging a warning when it matches nothing.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Option<ImageSource> {
        let resolved = self.probe(reference);
        if resolved.is_none() {
            tracing::warn!(reference, "Image not found");
        }
        resolved
    }

    /// Resolves `reference` without logging.
    ///
    /// # Returns
    /// - `Passthrough` for empty references, URLs, emoji and short literals
    /// - `Bundled` for the best catalog match
    /// - `None` when no cataloged path matches
    #[must_use]
    pub fn probe(&self, reference: &str) -> Option<ImageSource> {
        if is_passthrough(reference) {
            return Some(ImageSource::Passthrough(reference.to_string()));
        }

        let normalized = normalize_reference(reference);
        self.lookup(&normalized).cloned().map(ImageSource::Bundled)
    }

    /// Exact match first, then suffix match, then the first path (in logical
    /// order) containing the reference.
    fn lookup(&self, normalized: &str) -> Option<&'a AssetHandle> {
        if let Some(asset) = self.catalog.get(normalized) {
            return Some(asset);
        }

        let needle = normalized.replacen(ASSET_PREFIX, "", 1);
        if needle.is_empty() {
            return None;
        }

        self.catalog
            .iter()
            .find(|asset| asset.logical_path.ends_with(&needle))
            .or_else(|| self.catalog.iter().find(|asset| asset.logical_path.contains(&needle)))
    }
}

/// URLs and data URIs an `<img>` can load directly.
fn is_external(reference: &str) -> bool {
    reference.starts_with("http") || reference.starts_with("data:")
}

/// References returned unchanged instead of being looked up.
fn is_passthrough(reference: &str) -> bool {
    reference.is_empty()
        || is_external(reference)
        || reference.starts_with('👤')
        || reference.chars().count() < LITERAL_MAX_CHARS
}

/// Canonical logical path: no leading separators, `assets/` prefixed.
#[must_use]
pub fn normalize_reference(reference: &str) -> String {
    let trimmed = reference.trim().trim_start_matches('/');
    if trimmed.starts_with(ASSET_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{ASSET_PREFIX}{trimmed}")
    }
}
