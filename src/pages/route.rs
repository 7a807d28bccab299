//! Site routes and their URLs.

use std::fmt;

use crate::types::{
    Language,
    RecordId,
};

/// A page of the site, independent of language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/about`
    About,
    /// `/events`
    Events,
    /// `/events/{id}`
    EventDetail(RecordId),
    /// `/courses/{id}`
    CourseDetail(RecordId),
    /// `/contact`
    Contact,
    /// `/404` and any path that matches no other route.
    NotFound,
}

impl Route {
    /// Routes shown in the navigation, in menu order.
    pub const NAVIGATION: [Self; 4] = [Self::Home, Self::About, Self::Events, Self::Contact];

    /// Parses a site path such as `/events/3`.
    ///
    /// A leading language segment (`/en/about`) is ignored. Unknown paths map
    /// to [`Route::NotFound`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let mut segments: Vec<&str> =
            path.split('/').filter(|segment| !segment.is_empty()).collect();
        if segments.first().is_some_and(|first| Language::from_code(first).is_some()) {
            segments.remove(0);
        }

        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["events"] => Self::Events,
            ["events", id] => Self::EventDetail(RecordId::from(*id)),
            ["courses", id] => Self::CourseDetail(RecordId::from(*id)),
            ["contact"] => Self::Contact,
            _ => Self::NotFound,
        }
    }

    /// Language-independent path, e.g. `/events/3`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Events => "/events".to_string(),
            Self::EventDetail(id) => format!("/events/{id}"),
            Self::CourseDetail(id) => format!("/courses/{id}"),
            Self::Contact => "/contact".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// URL of this route in the built site for `language`.
    #[must_use]
    pub fn href(&self, language: Language) -> String {
        match self {
            Self::Home => format!("/{language}/"),
            Self::NotFound => format!("/{language}/404.html"),
            other => format!("/{language}{}/", other.path()),
        }
    }

    /// File written for this route, relative to the output directory.
    #[must_use]
    pub fn output_path(&self, language: Language) -> String {
        match self {
            Self::NotFound => format!("{language}/404.html"),
            Self::Home => format!("{language}/index.html"),
            other => format!("{language}{}/index.html", other.path()),
        }
    }

    /// Dictionary key of the route's navigation label.
    #[must_use]
    pub const fn nav_key(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("nav.home"),
            Self::About => Some("nav.about"),
            Self::Events => Some("nav.events"),
            Self::Contact => Some("nav.contact"),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
