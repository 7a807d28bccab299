//! Declared field schema per content category.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::input::content::{
    AgendaItem,
    BoardMemberRecord,
    CourseRecord,
    EventRecord,
    SocialLinkRecord,
    SponsorRecord,
    TestimonialRecord,
};
use crate::types::RecordId;

/// Field names shared by the schemas and the pages reading them.
#[allow(clippy::missing_docs_in_private_items)]
pub mod field {
    pub const TITLE: &str = "title";
    pub const DATE: &str = "date";
    pub const DESCRIPTION: &str = "description";
    pub const SUMMARY: &str = "summary";
    pub const LOCATION: &str = "location";
    pub const PARTICIPANTS: &str = "participants";
    pub const IMAGE: &str = "image";
    pub const KIND: &str = "kind";
    pub const KIND_LABEL: &str = "kindLabel";
    pub const REGISTRATION_URL: &str = "registrationUrl";
    pub const SCHEDULE_URL: &str = "scheduleUrl";
    pub const SURVIVAL_GUIDE_URL: &str = "survivalGuideUrl";
    pub const VIDEO_URL: &str = "videoUrl";
    pub const HOURS: &str = "hours";
    pub const PRICE: &str = "price";
    pub const WHAT_YOU_WILL_LEARN: &str = "whatYouWillLearn";
    pub const AGENDA: &str = "agenda";
    pub const OBJECTIVES: &str = "objectives";
    pub const GALLERY: &str = "gallery";
    pub const NAME: &str = "name";
    pub const LOGO: &str = "logo";
    pub const URL: &str = "url";
    pub const ROLE: &str = "role";
    pub const QUOTE: &str = "quote";
    pub const POSITION: &str = "position";
    pub const LABEL: &str = "label";
    pub const HREF: &str = "href";
    pub const ICON: &str = "icon";
}

/// Event types with a dictionary label under `events.filter.<type>`.
pub const KNOWN_EVENT_KINDS: [&str; 3] = ["workshop", "course", "competition"];

/// How one raw field is turned into a display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec<'r> {
    /// Translated through the dictionary.
    Localized(Cow<'r, str>),
    /// Translated when present.
    OptionalLocalized(Option<&'r str>),
    /// Each entry translated.
    LocalizedList(Option<&'r [String]>),
    /// Resolved through the image resolver.
    Image(&'r str),
    /// Resolved when present.
    OptionalImage(Option<&'r str>),
    /// Each entry resolved through the image resolver.
    Gallery(Option<&'r [String]>),
    /// Passed through unchanged.
    Text(&'r str),
    /// Passed through when present.
    OptionalText(Option<&'r str>),
    /// Passed through when present.
    Count(Option<u32>),
    /// Times pass through; activity keys are translated.
    Agenda(Option<&'r [AgendaItem]>),
}

/// A content record type with a declared field mapping.
pub trait ContentSchema {
    /// Category name used in logs and diagnostics.
    const CATEGORY: &'static str;

    /// Identifier of the record.
    fn id(&self) -> RecordId;

    /// Declared fields in display order.
    fn fields(&self) -> Vec<(&'static str, FieldSpec<'_>)>;
}

impl ContentSchema for EventRecord {
    const CATEGORY: &'static str = "event";

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn fields(&self) -> Vec<(&'static str, FieldSpec<'_>)> {
        let kind = self.kind.as_deref();
        let kind_label = match kind {
            Some(kind) if KNOWN_EVENT_KINDS.contains(&kind) => {
                FieldSpec::Localized(Cow::Owned(format!("events.filter.{kind}")))
            }
            other => FieldSpec::OptionalText(other),
        };

        vec![
            (field::TITLE, FieldSpec::Localized(Cow::Borrowed(&self.title_key))),
            (field::DATE, FieldSpec::Localized(Cow::Borrowed(&self.date_key))),
            (field::DESCRIPTION, FieldSpec::Localized(Cow::Borrowed(&self.description_key))),
            (field::LOCATION, FieldSpec::Text(&self.location)),
            (field::PARTICIPANTS, FieldSpec::Count(self.participants)),
            (field::IMAGE, FieldSpec::Image(&self.image)),
            (field::KIND, FieldSpec::OptionalText(kind)),
            (field::KIND_LABEL, kind_label),
            (field::REGISTRATION_URL, FieldSpec::OptionalText(self.registration_url.as_deref())),
            (field::GALLERY, FieldSpec::Gallery(self.gallery.as_deref())),
        ]
    }
}

impl ContentSchema for CourseRecord {
    const CATEGORY: &'static str = "course";

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn fields(&self) -> Vec<(&'static str, FieldSpec<'_>)> {
        let summary_key = self.short_description_key.as_deref().unwrap_or(&self.description_key);

        vec![
            (field::TITLE, FieldSpec::Localized(Cow::Borrowed(&self.title_key))),
            (field::DATE, FieldSpec::Localized(Cow::Borrowed(&self.date_key))),
            (field::DESCRIPTION, FieldSpec::Localized(Cow::Borrowed(&self.description_key))),
            (field::SUMMARY, FieldSpec::Localized(Cow::Borrowed(summary_key))),
            (field::LOCATION, FieldSpec::Text(&self.location)),
            (field::HOURS, FieldSpec::Count(self.hours)),
            (field::PRICE, FieldSpec::OptionalText(self.price.as_deref())),
            (field::PARTICIPANTS, FieldSpec::Count(self.participants)),
            (field::IMAGE, FieldSpec::Image(&self.image)),
            (field::REGISTRATION_URL, FieldSpec::OptionalText(self.registration_url.as_deref())),
            (field::SCHEDULE_URL, FieldSpec::OptionalText(self.schedule_url.as_deref())),
            (
                field::SURVIVAL_GUIDE_URL,
                FieldSpec::OptionalText(self.survival_guide_url.as_deref()),
            ),
            (field::VIDEO_URL, FieldSpec::OptionalText(self.video_url.as_deref())),
            (
                field::WHAT_YOU_WILL_LEARN,
                FieldSpec::LocalizedList(self.what_you_will_learn.as_deref()),
            ),
            (field::AGENDA, FieldSpec::Agenda(self.agenda.as_deref())),
            (field::OBJECTIVES, FieldSpec::LocalizedList(self.objectives.as_deref())),
            (field::GALLERY, FieldSpec::Gallery(self.gallery.as_deref())),
        ]
    }
}

impl ContentSchema for SponsorRecord {
    const CATEGORY: &'static str = "sponsor";

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn fields(&self) -> Vec<(&'static str, FieldSpec<'_>)> {
        vec![
            (field::NAME, FieldSpec::Text(&self.name)),
            (field::LOGO, FieldSpec::Image(&self.logo)),
            (field::URL, FieldSpec::OptionalText(self.url.as_deref())),
            (field::DESCRIPTION, FieldSpec::OptionalLocalized(self.description_key.as_deref())),
        ]
    }
}

impl ContentSchema for TestimonialRecord {
    const CATEGORY: &'static str = "testimonial";

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn fields(&self) -> Vec<(&'static str, FieldSpec<'_>)> {
        vec![
            (field::NAME, FieldSpec::Text(&self.name)),
            (field::ROLE, FieldSpec::Localized(Cow::Borrowed(&self.role_key))),
            (field::QUOTE, FieldSpec::Localized(Cow::Borrowed(&self.quote_key))),
            (field::IMAGE, FieldSpec::OptionalImage(self.image.as_deref())),
        ]
    }
}

impl ContentSchema for BoardMemberRecord {
    const CATEGORY: &'static str = "board member";

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn fields(&self) -> Vec<(&'static str, FieldSpec<'_>)> {
        vec![
            (field::NAME, FieldSpec::Text(&self.name)),
            (field::POSITION, FieldSpec::Localized(Cow::Borrowed(&self.position_key))),
            (field::QUOTE, FieldSpec::OptionalLocalized(self.quote_key.as_deref())),
            (field::IMAGE, FieldSpec::Image(&self.image)),
        ]
    }
}

impl ContentSchema for SocialLinkRecord {
    const CATEGORY: &'static str = "social link";

    /// Social links carry no id; the label identifies them.
    fn id(&self) -> RecordId {
        RecordId::new(self.label.clone())
    }

    fn fields(&self) -> Vec<(&'static str, FieldSpec<'_>)> {
        vec![
            (field::LABEL, FieldSpec::Text(&self.label)),
            (field::HREF, FieldSpec::Text(&self.href)),
            (field::ICON, FieldSpec::Text(&self.icon)),
        ]
    }
}

/// Every dictionary key a record refers to, in declaration order.
#[must_use]
pub fn localized_keys<R: ContentSchema>(record: &R) -> Vec<String> {
    let mut keys = Vec::new();
    for (_, spec) in record.fields() {
        match spec {
            FieldSpec::Localized(key) => keys.push(key.into_owned()),
            FieldSpec::OptionalLocalized(Some(key)) => keys.push(key.to_string()),
            FieldSpec::LocalizedList(Some(list)) => keys.extend(list.iter().cloned()),
            FieldSpec::Agenda(Some(items)) => {
                keys.extend(items.iter().map(|item| item.activity_key.clone()));
            }
            _ => {}
        }
    }
    let mut seen = HashSet::new();
    keys.retain(|key| seen.insert(key.clone()));
    keys
}

/// Every image reference a record holds, in declaration order.
#[must_use]
pub fn image_references<R: ContentSchema>(record: &R) -> Vec<String> {
    let mut references = Vec::new();
    for (_, spec) in record.fields() {
        match spec {
            FieldSpec::Image(reference) | FieldSpec::OptionalImage(Some(reference)) => {
                references.push(reference.to_string());
            }
            FieldSpec::Gallery(Some(list)) => references.extend(list.iter().cloned()),
            _ => {}
        }
    }
    references
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::{
        sample_course,
        sample_event,
    };

    fn describe(spec: &FieldSpec<'_>) -> String {
        match spec {
            FieldSpec::Localized(key) => format!("localized:{key}"),
            FieldSpec::OptionalText(Some(text)) => format!("text:{text}"),
            FieldSpec::OptionalText(None) => "absent".to_string(),
            other => format!("{other:?}"),
        }
    }

    #[rstest]
    #[case::workshop(Some("workshop"), "localized:events.filter.workshop")]
    #[case::competition(Some("competition"), "localized:events.filter.competition")]
    #[case::unknown(Some("hackathon"), "text:hackathon")]
    #[case::unset(None, "absent")]
    fn event_kind_label(#[case] kind: Option<&str>, #[case] expected: &str) {
        let event = EventRecord { kind: kind.map(String::from), ..sample_event(1) };

        let label = event
            .fields()
            .iter()
            .find(|(name, _)| *name == field::KIND_LABEL)
            .map(|(_, spec)| describe(spec));

        assert_that!(label, some(eq(expected)));
    }

    #[rstest]
    fn course_summary_prefers_short_description() {
        let with_short = CourseRecord {
            short_description_key: Some("courses.web.short".to_string()),
            ..sample_course("web")
        };
        let without_short = sample_course("web");

        let summary = |course: &CourseRecord| {
            course
                .fields()
                .into_iter()
                .find(|(name, _)| *name == field::SUMMARY)
                .map(|(_, spec)| spec.clone())
                .map(|spec| match spec {
                    FieldSpec::Localized(key) => key.into_owned(),
                    _ => String::new(),
                })
        };

        assert_that!(summary(&with_short), some(eq("courses.web.short")));
        assert_that!(summary(&without_short), some(eq("courses.web.description")));
    }

    #[rstest]
    fn localized_keys_of_course() {
        let course = CourseRecord {
            objectives: Some(vec!["courses.web.objective.1".to_string()]),
            agenda: Some(vec![AgendaItem {
                time: "09:00".to_string(),
                activity_key: "courses.web.agenda.welcome".to_string(),
            }]),
            ..sample_course("web")
        };

        let keys = localized_keys(&course);

        assert_that!(
            keys,
            elements_are![
                eq("courses.web.title"),
                eq("courses.web.date"),
                eq("courses.web.description"),
                eq("courses.web.agenda.welcome"),
                eq("courses.web.objective.1"),
            ]
        );
    }

    #[rstest]
    fn image_references_include_gallery() {
        let event = EventRecord {
            gallery: Some(vec!["gallery/one.jpg".to_string(), "gallery/two.jpg".to_string()]),
            ..sample_event(3)
        };

        assert_that!(
            image_references(&event),
            elements_are![eq("event-workshop.jpg"), eq("gallery/one.jpg"), eq("gallery/two.jpg")]
        );
    }

    #[rstest]
    fn social_link_id_is_label() {
        let link = SocialLinkRecord {
            label: "Instagram".to_string(),
            href: "https://instagram.com/bestlaspalmas".to_string(),
            icon: "Instagram".to_string(),
        };

        assert_that!(link.id(), eq(&RecordId::from("Instagram")));
    }
}
