//! The running site: loaded inputs, the salsa database and the language
//! selector behind one owner.

use salsa::Setter;

use crate::assets::catalog::ImageCatalog;
use crate::config::{
    AssetMatcher,
    ConfigError,
    ConfigManager,
    MatcherError,
    SiteSettings,
};
use crate::db::SiteDatabaseImpl;
use crate::diagnostics::{
    SiteDiagnostic,
    check_site,
};
use crate::i18n::selector::{
    FileLanguageStore,
    LanguageSelector,
    LanguageStore,
};
use crate::input::content::{
    ContentError,
    ContentStore,
};
use crate::input::dictionary::{
    DictionaryError,
    load_dictionary,
};
use crate::input::site::{
    Site,
    SiteProfile,
};
use crate::pages::{
    RenderedPage,
    Route,
    render_route,
};
use crate::types::Language;

/// Errors opening a site.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Asset patterns could not be compiled.
    #[error(transparent)]
    Matcher(#[from] MatcherError),

    /// The dictionary could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// A content file could not be loaded.
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Single owner of the site database and the active language.
///
/// The selector and the `Site.language` input are only changed together, so
/// every render after [`SiteSession::set_language`] sees the new language.
pub struct SiteSession {
    /// Memoized page queries.
    db: SiteDatabaseImpl,
    /// The salsa input the pages read.
    site: Site,
    /// Owner of the persisted language.
    selector: LanguageSelector,
    /// Settings the site was opened with.
    settings: SiteSettings,
}

impl std::fmt::Debug for SiteSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteSession")
            .field("selector", &self.selector)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl SiteSession {
    /// Loads settings and site data from the manager's site root and restores
    /// the persisted language from the configured state file.
    ///
    /// # Errors
    /// - Settings file unreadable or invalid
    /// - Dictionary or content file unreadable or malformed
    pub fn open(config: &mut ConfigManager, year: i32) -> Result<Self, SessionError> {
        config.load_settings()?;
        let store = FileLanguageStore::new(config.state_path());

        Self::open_with_store(config, Box::new(store), year)
    }

    /// Like [`SiteSession::open`] with already loaded settings and a custom
    /// language store.
    pub fn open_with_store(
        config: &ConfigManager,
        store: Box<dyn LanguageStore>,
        year: i32,
    ) -> Result<Self, SessionError> {
        let settings = config.get_settings().clone();
        tracing::info!(site_root = %config.site_root().display(), "Opening site");

        let dictionary = load_dictionary(&config.dictionary_path())?;
        let content = ContentStore::load(&config.data_dir())?;
        let matcher = AssetMatcher::new(config.site_root().to_path_buf(), &settings)?;
        let images = ImageCatalog::scan(&matcher);
        tracing::debug!(
            es_keys = dictionary.len(Language::Es),
            en_keys = dictionary.len(Language::En),
            images = images.len(),
            "Loaded site data"
        );

        let selector = LanguageSelector::initialize(store, settings.default_language());
        let profile = SiteProfile::from_settings(&settings, year);

        let db = SiteDatabaseImpl::default();
        let site = Site::new(&db, selector.active_language(), dictionary, content, images, profile);

        Ok(Self { db, site, selector, settings })
    }

    /// Language currently in effect.
    #[must_use]
    pub const fn active_language(&self) -> Language {
        self.selector.active_language()
    }

    /// Settings the site was opened with.
    #[must_use]
    pub const fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Bundled images.
    #[must_use]
    pub fn images(&self) -> &ImageCatalog {
        self.site.images(&self.db)
    }

    /// Changes and persists the active language.
    ///
    /// Unsupported codes are ignored and `None` is returned.
    pub fn set_language(&mut self, code: &str) -> Option<Language> {
        let language = self.selector.set_active_language(code)?;
        self.apply_language(language);
        tracing::info!(language = %language, "Active language changed");
        Some(language)
    }

    /// Renders `route` in the active language.
    pub fn render(&self, route: &Route) -> RenderedPage {
        render_route(&self.db, self.site, route.clone())
    }

    /// Renders `route` in `language` without changing the persisted choice.
    pub fn render_in(&mut self, route: &Route, language: Language) -> RenderedPage {
        self.with_language(language, |session| session.render(route))
    }

    /// Every route of the site: the static pages plus one detail page per
    /// event and course.
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        let content = self.site.content(&self.db);

        Route::NAVIGATION
            .into_iter()
            .chain(content.event_ids().into_iter().map(Route::EventDetail))
            .chain(content.course_ids().into_iter().map(Route::CourseDetail))
            .chain(std::iter::once(Route::NotFound))
            .collect()
    }

    /// Renders every route in `language` without changing the persisted choice.
    pub fn render_all_in(&mut self, language: Language) -> Vec<RenderedPage> {
        let routes = self.routes();
        self.with_language(language, |session| {
            routes.iter().map(|route| session.render(route)).collect()
        })
    }

    /// Missing translations, unresolved images and duplicate ids.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<SiteDiagnostic> {
        check_site(
            self.site.dictionary(&self.db),
            self.site.content(&self.db),
            self.site.images(&self.db),
        )
    }

    /// Runs `f` with `language` applied, then restores the active one.
    fn with_language<T>(&mut self, language: Language, f: impl FnOnce(&Self) -> T) -> T {
        let active = self.active_language();
        self.apply_language(language);
        let result = f(self);
        self.apply_language(active);
        result
    }

    /// Sets the salsa input when it differs.
    fn apply_language(&mut self, language: Language) {
        if self.site.language(&self.db) != language {
            self.site.set_language(&mut self.db).to(language);
        }
    }
}
