//! The site input: everything a page render reads.

use crate::assets::catalog::ImageCatalog;
use crate::config::{
    ContactConfig,
    ExternalLink,
    SiteSettings,
};
use crate::input::content::ContentStore;
use crate::input::dictionary::Dictionary;
use crate::types::Language;

/// Salsa input holding the active language and the loaded site data.
///
/// Only `language` changes during a session; changing it invalidates every
/// memoized page.
#[salsa::input]
pub struct Site {
    /// Language every page is rendered in.
    pub language: Language,

    /// Translations of both languages.
    #[returns(ref)]
    pub dictionary: Dictionary,

    /// Every content collection.
    #[returns(ref)]
    pub content: ContentStore,

    /// Bundled images.
    #[returns(ref)]
    pub images: ImageCatalog,

    /// Site-wide values for the header and footer.
    #[returns(ref)]
    pub profile: SiteProfile,
}

/// Untranslated site-wide values shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    /// Brand shown in the header and titles.
    pub site_name: String,
    /// Contact details.
    pub contact: ContactConfig,
    /// External link in the header.
    pub partner_link: Option<ExternalLink>,
    /// Year printed in the copyright line.
    pub year: i32,
}

impl SiteProfile {
    /// Profile from the loaded settings.
    #[must_use]
    pub fn from_settings(settings: &SiteSettings, year: i32) -> Self {
        Self {
            site_name: settings.site_name.clone(),
            contact: settings.contact.clone(),
            partner_link: settings.partner_link.clone(),
            year,
        }
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::from_settings(&SiteSettings::default(), 2025)
    }
}
