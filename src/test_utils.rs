//! Test helpers shared by several test modules.
#![cfg(test)]

use std::path::Path;

use crate::assets::catalog::ImageCatalog;
use crate::db::SiteDatabaseImpl;
use crate::input::content::{
    ContentStore,
    CourseRecord,
    EventRecord,
    SocialLinkRecord,
};
use crate::input::dictionary::Dictionary;
use crate::input::site::{
    Site,
    SiteProfile,
};
use crate::types::{
    Language,
    RecordId,
};

/// Creates an event whose keys follow `events.<id>.<field>`.
pub(crate) fn sample_event(id: u64) -> EventRecord {
    EventRecord {
        id: RecordId::from(id),
        title_key: format!("events.{id}.title"),
        date_key: format!("events.{id}.date"),
        description_key: format!("events.{id}.description"),
        location: "ULPGC".to_string(),
        participants: Some(40),
        image: "event-workshop.jpg".to_string(),
        kind: Some("workshop".to_string()),
        registration_url: None,
        gallery: None,
    }
}

/// Creates a course whose keys follow `courses.<id>.<field>`.
pub(crate) fn sample_course(id: &str) -> CourseRecord {
    CourseRecord {
        id: RecordId::from(id),
        title_key: format!("courses.{id}.title"),
        date_key: format!("courses.{id}.date"),
        description_key: format!("courses.{id}.description"),
        short_description_key: None,
        location: "Campus Tafira".to_string(),
        hours: Some(40),
        price: Some("50€".to_string()),
        participants: None,
        image: format!("assets/courses/{id}.jpg"),
        registration_url: None,
        schedule_url: None,
        survival_guide_url: None,
        video_url: None,
        what_you_will_learn: None,
        agenda: None,
        objectives: None,
        gallery: None,
    }
}

/// A small dictionary covering the samples above and the shell labels.
pub(crate) fn sample_dictionary() -> Dictionary {
    Dictionary::from_entries([
        (Language::Es, "nav.home", "Inicio"),
        (Language::En, "nav.home", "Home"),
        (Language::Es, "nav.about", "Sobre Nosotros"),
        (Language::En, "nav.about", "About Us"),
        (Language::Es, "nav.events", "Eventos"),
        (Language::En, "nav.events", "Events"),
        (Language::Es, "nav.contact", "Contacto"),
        (Language::En, "nav.contact", "Contact"),
        (Language::Es, "events.1.title", "Taller de IA"),
        (Language::En, "events.1.title", "AI Workshop"),
        (Language::Es, "events.1.date", "15 de marzo"),
        (Language::En, "events.1.date", "March 15"),
        (Language::Es, "events.1.description", "Aprende IA"),
        (Language::En, "events.1.description", "Learn AI"),
        (Language::Es, "events.filter.workshop", "Taller"),
        (Language::En, "events.filter.workshop", "Workshop"),
        (Language::Es, "events.notfound", "Evento no encontrado"),
        (Language::En, "events.notfound", "Event not found"),
        (Language::Es, "courses.notfound", "Curso no encontrado"),
        (Language::En, "courses.notfound", "Course not found"),
        (Language::Es, "courses.web.title", "Curso de desarrollo web"),
        (Language::En, "courses.web.title", "Web development course"),
        (Language::Es, "courses.web.date", "Abril"),
        (Language::En, "courses.web.date", "April"),
        (Language::Es, "courses.web.description", "Aprende a crear sitios"),
        (Language::En, "courses.web.description", "Learn to build sites"),
        (Language::Es, "about.board.president", "Presidenta"),
        (Language::En, "about.board.president", "President"),
        (Language::Es, "footer.rights", "Todos los derechos reservados."),
        (Language::En, "footer.rights", "All rights reserved."),
    ])
}

/// Content with one upcoming event and one past course.
pub(crate) fn sample_content() -> ContentStore {
    ContentStore {
        events_upcoming: vec![sample_event(1)],
        courses_past: vec![sample_course("web")],
        social_links: vec![SocialLinkRecord {
            label: "Instagram".to_string(),
            href: "https://www.instagram.com/bestlaspalmas".to_string(),
            icon: "Instagram".to_string(),
        }],
        ..ContentStore::default()
    }
}

/// Creates a `Site` input over the sample data.
pub(crate) fn create_site(db: &SiteDatabaseImpl, language: Language) -> Site {
    Site::new(
        db,
        language,
        sample_dictionary(),
        sample_content(),
        ImageCatalog::from_paths(Path::new("/site"), ["assets/event-workshop.jpg"]),
        SiteProfile::default(),
    )
}
