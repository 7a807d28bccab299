//! Page rendering.
//!
//! Each page is a pure function of the site input and the route; the salsa
//! query [`render_route`] memoizes the result until the site changes.

mod about;
pub mod contact;
mod detail;
mod events;
mod home;
pub mod html;
pub mod route;
mod shell;

use crate::assets::resolver::{
    ImageResolver,
    ImageSource,
};
use crate::db::SiteDatabase;
use crate::i18n::translator::Translator;
use crate::input::content::ContentStore;
use crate::input::site::{
    Site,
    SiteProfile,
};
pub use crate::pages::contact::{
    ContactForm,
    FormOutcome,
};
pub use crate::pages::route::Route;
use crate::resolve::record::ImageValue;
use crate::types::Language;

/// Whether the requested record or page exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageStatus {
    /// The page was rendered.
    Ok,
    /// The route or record does not exist.
    NotFound,
}

/// A fully rendered HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Route that was rendered.
    pub route: Route,
    /// Language the page is in.
    pub language: Language,
    /// Document title.
    pub title: String,
    /// Complete HTML document.
    pub html: String,
    /// Whether the route existed.
    pub status: PageStatus,
}

/// Collaborators shared by every page renderer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageContext<'a> {
    /// Translator for the page language.
    pub translator: Translator<'a>,
    /// Image resolver over the catalog.
    pub images: ImageResolver<'a>,
    /// Every content collection.
    pub content: &'a ContentStore,
    /// Site-wide values.
    pub profile: &'a SiteProfile,
    /// Route being rendered.
    pub route: &'a Route,
}

impl PageContext<'_> {
    /// Translates `key` into the page language.
    pub fn t(&self, key: &str) -> String {
        self.translator.text(key)
    }

    /// Language of the page.
    pub const fn language(&self) -> Language {
        self.translator.language()
    }

    /// URL of `route` in the current language.
    pub fn href(&self, route: &Route) -> String {
        route.href(self.language())
    }
}

/// Main content of a page, before the shell is added.
pub(crate) struct PageBody {
    /// Document title prefix; the site name is appended.
    pub title: String,
    /// Markup placed inside `<main>`.
    pub main: String,
    /// Whether the route existed.
    pub status: PageStatus,
}

impl PageBody {
    /// A found page.
    pub const fn ok(title: String, main: String) -> Self {
        Self { title, main, status: PageStatus::Ok }
    }
}

/// `src` for an image field.
///
/// Unresolved references fall back to the raw reference; literals that
/// cannot be loaded (emoji, empty) yield `None`.
pub(crate) fn image_src(image: &ImageValue) -> Option<String> {
    match &image.resolved {
        Some(source @ ImageSource::Bundled(_)) => Some(source.src()),
        Some(source) if source.is_loadable() => Some(source.src()),
        Some(_) => None,
        None => Some(image.reference.clone()),
    }
}

/// Renders `route` for the site's active language.
#[salsa::tracked]
#[allow(clippy::needless_pass_by_value)]
pub fn render_route(db: &dyn SiteDatabase, site: Site, route: Route) -> RenderedPage {
    let language = site.language(db);
    tracing::debug!(route = %route, language = %language, "Rendering page");

    render_page(
        Translator::new(site.dictionary(db), language),
        ImageResolver::new(site.images(db)),
        site.content(db),
        site.profile(db),
        &route,
    )
}

/// Renders a page without memoization.
#[must_use]
pub fn render_page(
    translator: Translator<'_>,
    images: ImageResolver<'_>,
    content: &ContentStore,
    profile: &SiteProfile,
    route: &Route,
) -> RenderedPage {
    let ctx = PageContext { translator, images, content, profile, route };

    let body = match route {
        Route::Home => home::render(&ctx),
        Route::About => about::render(&ctx),
        Route::Events => events::render(&ctx),
        Route::EventDetail(id) => detail::render_event(&ctx, id),
        Route::CourseDetail(id) => detail::render_course(&ctx, id),
        Route::Contact => contact::render(&ctx),
        Route::NotFound => shell::not_found(&ctx),
    };

    let title = if body.title.is_empty() {
        profile.site_name.clone()
    } else {
        format!("{} | {}", body.title, profile.site_name)
    };
    let html = shell::document(&ctx, &title, &body.main);

    RenderedPage { route: route.clone(), language: ctx.language(), title, html, status: body.status }
}
