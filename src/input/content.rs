//! Content records loaded from the static data files.

use std::collections::HashSet;
use std::path::{
    Path,
    PathBuf,
};

use jsonc_parser::ParseOptions;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::{
    Period,
    RecordId,
};

/// Errors loading content files.
#[derive(Error, Debug)]
pub enum ContentError {
    /// A content file exists but could not be read.
    #[error("Failed to read content file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file is not valid JSON for its record type.
    #[error("Failed to parse content file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// One data file per content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFile {
    /// `events-upcoming.json`
    EventsUpcoming,
    /// `events-past.json`
    EventsPast,
    /// `courses-upcoming.json`
    CoursesUpcoming,
    /// `courses-past.json`
    CoursesPast,
    /// `sponsors-current.json`
    SponsorsCurrent,
    /// `sponsors-past.json`
    SponsorsPast,
    /// `testimonials.json`
    Testimonials,
    /// `board-members.json`
    BoardMembers,
    /// `social-links.json`
    SocialLinks,
}

impl ContentFile {
    /// Every content file, in load order.
    pub const ALL: [Self; 9] = [
        Self::EventsUpcoming,
        Self::EventsPast,
        Self::CoursesUpcoming,
        Self::CoursesPast,
        Self::SponsorsCurrent,
        Self::SponsorsPast,
        Self::Testimonials,
        Self::BoardMembers,
        Self::SocialLinks,
    ];

    /// File name inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::EventsUpcoming => "events-upcoming.json",
            Self::EventsPast => "events-past.json",
            Self::CoursesUpcoming => "courses-upcoming.json",
            Self::CoursesPast => "courses-past.json",
            Self::SponsorsCurrent => "sponsors-current.json",
            Self::SponsorsPast => "sponsors-past.json",
            Self::Testimonials => "testimonials.json",
            Self::BoardMembers => "board-members.json",
            Self::SocialLinks => "social-links.json",
        }
    }
}

/// An event listed on the events page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Stable identifier, unique across upcoming and past.
    pub id: RecordId,
    /// Localized title.
    pub title_key: String,
    /// Localized date.
    pub date_key: String,
    /// Localized description.
    pub description_key: String,
    /// Venue, shown as is.
    #[serde(default)]
    pub location: String,
    /// Number of participants.
    #[serde(default)]
    pub participants: Option<u32>,
    /// Image reference.
    #[serde(default)]
    pub image: String,
    /// `workshop`, `course`, `competition`, or any other free-form type.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// External registration form.
    #[serde(default)]
    pub registration_url: Option<String>,
    /// Photo references for the gallery.
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
}

/// One row of a course agenda.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    /// Start time, shown as is.
    pub time: String,
    /// Localized activity.
    pub activity_key: String,
}

/// A course listed on the events page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Stable identifier, unique across upcoming and past.
    pub id: RecordId,
    /// Localized title.
    pub title_key: String,
    /// Localized date.
    pub date_key: String,
    /// Localized description.
    pub description_key: String,
    /// Preferred over `description_key` on the detail page when present.
    #[serde(default, rename = "shortdescriptionKey")]
    pub short_description_key: Option<String>,
    /// Venue, shown as is.
    #[serde(default)]
    pub location: String,
    /// Length in hours.
    #[serde(default)]
    pub hours: Option<u32>,
    /// Price, shown as is.
    #[serde(default)]
    pub price: Option<String>,
    /// Number of participants.
    #[serde(default)]
    pub participants: Option<u32>,
    /// Image reference.
    #[serde(default)]
    pub image: String,
    /// External registration form.
    #[serde(default)]
    pub registration_url: Option<String>,
    /// Schedule document.
    #[serde(default)]
    pub schedule_url: Option<String>,
    /// Survival guide document.
    #[serde(default)]
    pub survival_guide_url: Option<String>,
    /// Embeddable video.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Localized learning outcomes.
    #[serde(default)]
    pub what_you_will_learn: Option<Vec<String>>,
    /// Agenda rows.
    #[serde(default)]
    pub agenda: Option<Vec<AgendaItem>>,
    /// Localized objectives.
    #[serde(default)]
    pub objectives: Option<Vec<String>>,
    /// Photo references for the gallery.
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
}

/// A current or past sponsor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorRecord {
    /// Stable identifier.
    pub id: RecordId,
    /// Sponsor name, shown as is.
    pub name: String,
    /// Logo image reference.
    #[serde(default)]
    pub logo: String,
    /// Sponsor website.
    #[serde(default)]
    pub url: Option<String>,
    /// Localized description.
    #[serde(default)]
    pub description_key: Option<String>,
}

/// A quote from a participant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialRecord {
    /// Stable identifier.
    pub id: RecordId,
    /// Author name, shown as is.
    pub name: String,
    /// Localized role of the author.
    pub role_key: String,
    /// Localized quote.
    pub quote_key: String,
    /// Author photo reference.
    #[serde(default)]
    pub image: Option<String>,
}

/// A member of the local board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMemberRecord {
    /// Stable identifier.
    pub id: RecordId,
    /// Member name, shown as is.
    pub name: String,
    /// Localized position.
    pub position_key: String,
    /// Localized quote.
    #[serde(default)]
    pub quote_key: Option<String>,
    /// Photo reference; an emoji placeholder by default.
    #[serde(default = "default_member_image")]
    pub image: String,
}

/// Placeholder avatar for members without a photo.
fn default_member_image() -> String {
    "👤".to_string()
}

/// A social network profile of the chapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkRecord {
    /// Link text; also the record id.
    pub label: String,
    /// Profile URL.
    pub href: String,
    /// Icon name (e.g. `Instagram`, `Linkedin`, `TikTok`).
    #[serde(default)]
    pub icon: String,
}

/// Every content collection of the site, read-only after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    /// `events-upcoming.json`
    pub events_upcoming: Vec<EventRecord>,
    /// `events-past.json`
    pub events_past: Vec<EventRecord>,
    /// `courses-upcoming.json`
    pub courses_upcoming: Vec<CourseRecord>,
    /// `courses-past.json`
    pub courses_past: Vec<CourseRecord>,
    /// `sponsors-current.json`
    pub sponsors_current: Vec<SponsorRecord>,
    /// `sponsors-past.json`
    pub sponsors_past: Vec<SponsorRecord>,
    /// `testimonials.json`
    pub testimonials: Vec<TestimonialRecord>,
    /// `board-members.json`
    pub board_members: Vec<BoardMemberRecord>,
    /// `social-links.json`
    pub social_links: Vec<SocialLinkRecord>,
}

impl ContentStore {
    /// Loads all data files from `data_dir`.
    ///
    /// A missing file yields an empty collection; unreadable or malformed
    /// files are errors.
    pub fn load(data_dir: &Path) -> Result<Self, ContentError> {
        tracing::debug!("Loading content from: {:?}", data_dir);

        Ok(Self {
            events_upcoming: load_collection(data_dir, ContentFile::EventsUpcoming)?,
            events_past: load_collection(data_dir, ContentFile::EventsPast)?,
            courses_upcoming: load_collection(data_dir, ContentFile::CoursesUpcoming)?,
            courses_past: load_collection(data_dir, ContentFile::CoursesPast)?,
            sponsors_current: load_collection(data_dir, ContentFile::SponsorsCurrent)?,
            sponsors_past: load_collection(data_dir, ContentFile::SponsorsPast)?,
            testimonials: load_collection(data_dir, ContentFile::Testimonials)?,
            board_members: load_collection(data_dir, ContentFile::BoardMembers)?,
            social_links: load_collection(data_dir, ContentFile::SocialLinks)?,
        })
    }

    /// Finds an event by id, searching upcoming before past.
    #[must_use]
    pub fn find_event(&self, id: &RecordId) -> Option<(&EventRecord, Period)> {
        find_in(&self.events_upcoming, &self.events_past, |event| &event.id == id)
    }

    /// Finds a course by id, searching upcoming before past.
    #[must_use]
    pub fn find_course(&self, id: &RecordId) -> Option<(&CourseRecord, Period)> {
        find_in(&self.courses_upcoming, &self.courses_past, |course| &course.id == id)
    }

    /// Ids of every event, upcoming first, without duplicates.
    #[must_use]
    pub fn event_ids(&self) -> Vec<RecordId> {
        unique_ids(self.events_upcoming.iter().chain(&self.events_past).map(|e| &e.id))
    }

    /// Ids of every course, upcoming first, without duplicates.
    #[must_use]
    pub fn course_ids(&self) -> Vec<RecordId> {
        unique_ids(self.courses_upcoming.iter().chain(&self.courses_past).map(|c| &c.id))
    }
}

/// First match in `upcoming`, then in `past`.
fn find_in<'a, T>(
    upcoming: &'a [T],
    past: &'a [T],
    matches: impl Fn(&T) -> bool,
) -> Option<(&'a T, Period)> {
    upcoming
        .iter()
        .find(|record| matches(record))
        .map(|record| (record, Period::Upcoming))
        .or_else(|| past.iter().find(|record| matches(record)).map(|record| (record, Period::Past)))
}

/// Ids in first-seen order.
fn unique_ids<'a>(ids: impl Iterator<Item = &'a RecordId>) -> Vec<RecordId> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).cloned().collect()
}

/// Reads one content file; a missing file is an empty collection.
fn load_collection<T: DeserializeOwned>(
    data_dir: &Path,
    file: ContentFile,
) -> Result<Vec<T>, ContentError> {
    let path = data_dir.join(file.file_name());

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Content file not found, using empty collection: {:?}", path);
            return Ok(Vec::new());
        }
        Err(source) => return Err(ContentError::Io { path, source }),
    };

    parse_collection(&text).map_err(|message| ContentError::Parse { path, message })
}

/// Parses one data file: a JSON (comments allowed) array of records.
pub fn parse_collection<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, String> {
    let Some(json) = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
        .map_err(|e| e.to_string())?
    else {
        return Ok(Vec::new());
    };

    serde_json::from_value(json).map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    const EVENTS: &str = r#"[
  // Workshops
  {
    "id": 1,
    "titleKey": "events.ai.title",
    "dateKey": "events.ai.date",
    "descriptionKey": "events.ai.description",
    "location": "ULPGC - Edificio de Informática",
    "participants": 40,
    "image": "event-workshop.jpg",
    "type": "workshop"
  }
]"#;

    const COURSES: &str = r#"[
  {
    "id": "web-2026",
    "titleKey": "courses.web.title",
    "dateKey": "courses.web.date",
    "descriptionKey": "courses.web.description",
    "shortdescriptionKey": "courses.web.short",
    "location": "Campus Tafira",
    "hours": 40,
    "price": "50€",
    "image": "assets/courses/web.jpg",
    "agenda": [{ "time": "09:00", "activityKey": "courses.web.agenda.welcome" }],
    "objectives": ["courses.web.objective.1"]
  }
]"#;

    #[googletest::test]
    fn test_parse_event_record() {
        let events: Vec<EventRecord> = parse_collection(EVENTS).unwrap();

        assert_that!(events, len(eq(1)));
        let event = &events[0];
        expect_that!(event.id, eq(&RecordId::from("1")));
        expect_that!(event.title_key, eq("events.ai.title"));
        expect_that!(event.participants, some(eq(40)));
        expect_that!(event.kind.as_deref(), some(eq("workshop")));
        expect_that!(event.gallery, none());
    }

    #[googletest::test]
    fn test_parse_course_record_optional_fields() {
        let courses: Vec<CourseRecord> = parse_collection(COURSES).unwrap();

        let course = &courses[0];
        expect_that!(course.short_description_key.as_deref(), some(eq("courses.web.short")));
        expect_that!(course.hours, some(eq(40)));
        expect_that!(course.agenda.as_ref().map(Vec::len), some(eq(1)));
        expect_that!(course.what_you_will_learn, none());
        expect_that!(course.registration_url, none());
    }

    #[googletest::test]
    fn test_board_member_default_image() {
        let members: Vec<BoardMemberRecord> = parse_collection(
            r#"[{ "id": 1, "name": "Ana García", "positionKey": "about.board.president" }]"#,
        )
        .unwrap();

        expect_that!(members[0].image, eq("👤"));
        expect_that!(members[0].quote_key, none());
    }

    #[googletest::test]
    fn test_parse_collection_rejects_missing_required_field() {
        let result: Result<Vec<EventRecord>, _> = parse_collection(r#"[{ "id": 1 }]"#);

        expect_that!(result, err(contains_substring("titleKey")));
    }

    #[googletest::test]
    fn test_load_reads_files_and_tolerates_missing_ones() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("events-upcoming.json"), EVENTS).unwrap();
        fs::write(temp_dir.path().join("courses-past.json"), COURSES).unwrap();

        let store = ContentStore::load(temp_dir.path()).unwrap();

        expect_that!(store.events_upcoming, len(eq(1)));
        expect_that!(store.courses_past, len(eq(1)));
        expect_that!(store.events_past, is_empty());
        expect_that!(store.social_links, is_empty());
    }

    #[googletest::test]
    fn test_load_reports_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("testimonials.json"), "[{").unwrap();

        let result = ContentStore::load(temp_dir.path());

        let Err(ContentError::Parse { path, .. }) = result else {
            panic!("expected a parse error");
        };
        expect_that!(path.ends_with("testimonials.json"), eq(true));
    }

    #[rstest]
    #[case::upcoming("1", Some(Period::Upcoming))]
    #[case::past("web-2026", Some(Period::Past))]
    #[case::unknown("999", None)]
    fn test_find_by_id(#[case] id: &str, #[case] expected: Option<Period>) {
        let store = ContentStore {
            events_upcoming: parse_collection(EVENTS).unwrap(),
            courses_past: parse_collection(COURSES).unwrap(),
            ..ContentStore::default()
        };
        let id = RecordId::from(id);

        let found = store
            .find_event(&id)
            .map(|(_, period)| period)
            .or_else(|| store.find_course(&id).map(|(_, period)| period));

        assert_eq!(found, expected);
    }

    #[googletest::test]
    fn test_ids_prefer_upcoming_and_skip_duplicates() {
        let mut store = ContentStore {
            events_upcoming: parse_collection(EVENTS).unwrap(),
            ..ContentStore::default()
        };
        store.events_past = store.events_upcoming.clone();

        expect_that!(store.event_ids(), elements_are![eq(&RecordId::from("1"))]);
        expect_that!(store.find_event(&RecordId::from("1")).map(|(_, p)| p), some(eq(Period::Upcoming)));
    }
}
