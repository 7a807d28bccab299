//! Consistency checks between the content records, the dictionary and the
//! image catalog.

use std::collections::HashSet;
use std::fmt;

use crate::assets::catalog::ImageCatalog;
use crate::assets::resolver::ImageResolver;
use crate::input::content::ContentStore;
use crate::input::dictionary::Dictionary;
use crate::resolve::schema::{
    ContentSchema,
    image_references,
    localized_keys,
};
use crate::types::{
    Language,
    RecordId,
};

/// How serious a [`SiteDiagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Reported; the site still builds correctly.
    Warning,
    /// Makes `check` fail.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDiagnostic {
    /// Warning or error.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl SiteDiagnostic {
    /// Creates a warning.
    fn warning(message: String) -> Self {
        Self { severity: Severity::Warning, message }
    }

    /// Creates an error.
    fn error(message: String) -> Self {
        Self { severity: Severity::Error, message }
    }

    /// True for [`Severity::Error`].
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for SiteDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Checks the loaded site for missing translations, language parity,
/// unresolved images and duplicate ids.
#[must_use]
pub fn check_site(
    dictionary: &Dictionary,
    content: &ContentStore,
    images: &ImageCatalog,
) -> Vec<SiteDiagnostic> {
    let resolver = ImageResolver::new(images);
    let mut diagnostics = Vec::new();

    let mut check = |records: &mut dyn Iterator<Item = RecordReport>| {
        for report in records {
            for key in &report.keys {
                for language in Language::ALL {
                    if !dictionary.contains_key(language, key) {
                        diagnostics.push(SiteDiagnostic::warning(format!(
                            "Translation key '{key}' used by {} '{}' is missing in '{language}'",
                            report.category, report.id
                        )));
                    }
                }
            }
            for reference in &report.images {
                if resolver.probe(reference).is_none() {
                    diagnostics.push(SiteDiagnostic::warning(format!(
                        "Image '{reference}' used by {} '{}' matches no bundled asset",
                        report.category, report.id
                    )));
                }
            }
        }
    };

    check(&mut reports(&content.events_upcoming).chain(reports(&content.events_past)));
    check(&mut reports(&content.courses_upcoming).chain(reports(&content.courses_past)));
    check(&mut reports(&content.sponsors_current).chain(reports(&content.sponsors_past)));
    check(&mut reports(&content.testimonials));
    check(&mut reports(&content.board_members));
    check(&mut reports(&content.social_links));

    diagnostics.extend(duplicate_ids(&content.events_upcoming, &content.events_past));
    diagnostics.extend(duplicate_ids(&content.courses_upcoming, &content.courses_past));
    diagnostics.extend(duplicate_ids(&content.sponsors_current, &content.sponsors_past));
    diagnostics.extend(language_parity(dictionary));

    tracing::debug!(count = diagnostics.len(), "Site check finished");
    diagnostics
}

/// What one record references.
struct RecordReport {
    /// Category named in messages.
    category: &'static str,
    /// Id named in messages.
    id: RecordId,
    /// Localized keys the record uses.
    keys: Vec<String>,
    /// Image references the record uses.
    images: Vec<String>,
}

/// One report per record.
fn reports<R: ContentSchema>(records: &[R]) -> impl Iterator<Item = RecordReport> + '_ {
    records.iter().map(|record| RecordReport {
        category: R::CATEGORY,
        id: record.id(),
        keys: localized_keys(record),
        images: image_references(record),
    })
}

/// Ids occurring more than once across both halves of a category.
fn duplicate_ids<R: ContentSchema>(first: &[R], second: &[R]) -> Vec<SiteDiagnostic> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    first
        .iter()
        .chain(second)
        .map(R::id)
        .filter(|id| !seen.insert(id.clone()) && reported.insert(id.clone()))
        .map(|id| SiteDiagnostic::error(format!("Duplicate {} id '{id}'", R::CATEGORY)))
        .collect()
}

/// Keys defined in one language but not the other.
fn language_parity(dictionary: &Dictionary) -> Vec<SiteDiagnostic> {
    let mut diagnostics = Vec::new();

    for language in Language::ALL {
        for other in Language::ALL.into_iter().filter(|other| *other != language) {
            let other_keys = dictionary.keys(other);
            for key in dictionary.keys(language).difference(&other_keys) {
                diagnostics.push(SiteDiagnostic::warning(format!(
                    "Translation key '{key}' exists in '{language}' but not in '{other}'"
                )));
            }
        }
    }

    diagnostics
}
