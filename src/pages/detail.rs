//! Event and course detail pages.

use super::html::Html;
use super::route::Route;
use super::shell::missing_record;
use super::{
    PageBody,
    PageContext,
    image_src,
};
use crate::resolve::record::{
    DisplayRecord,
    ImageValue,
    resolve_record,
};
use crate::resolve::schema::field;
use crate::types::{
    Period,
    RecordId,
};

/// Permissions of the embedded video player.
const VIDEO_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; \
                           picture-in-picture; web-share";

/// Detail page of one event, or a not-found message.
pub(crate) fn render_event(ctx: &PageContext<'_>, id: &RecordId) -> PageBody {
    let Some((event, period)) = ctx.content.find_event(id) else {
        tracing::debug!(id = %id, "Event not found");
        return missing_record(ctx, "events.notfound");
    };
    let record = resolve_record(event, &ctx.translator, &ctx.images);
    let title = record.text_or_empty(field::TITLE).to_string();
    let mut html = Html::new();

    html.open("article", &[("class", "detail event-detail")]);
    html.link(&ctx.href(&Route::Events), "button ghost back", &ctx.t("events.back"));

    html.open("div", &[("class", "card")]);
    if let Some(src) = record.image(field::IMAGE).and_then(image_src) {
        html.void("img", &[("src", src.as_str()), ("alt", title.as_str()), ("class", "cover")]);
    }
    if let Some(label) = record.text(field::KIND_LABEL) {
        let class = format!("badge badge-{}", record.text_or_empty(field::KIND));
        html.element("span", &[("class", class.as_str())], label);
    }
    html.element("h1", &[], &title);
    html.element("p", &[("class", "muted")], record.text_or_empty(field::DESCRIPTION));

    html.open("ul", &[("class", "meta")]);
    html.element("li", &[("class", "date")], record.text_or_empty(field::DATE));
    html.element("li", &[("class", "location")], record.text_or_empty(field::LOCATION));
    if let Some(count) = record.count(field::PARTICIPANTS) {
        html.element(
            "li",
            &[("class", "participants")],
            &format!("{count} {}", ctx.t("events.participants")),
        );
    }
    html.close("ul");

    if period == Period::Upcoming {
        let register_href = record
            .text(field::REGISTRATION_URL)
            .map_or_else(|| ctx.href(&Route::Contact), str::to_string);
        html.link(&register_href, "button block", &ctx.t("events.registerNow"));
    }
    html.close("div");

    html.raw(&gallery(&title, record.gallery(field::GALLERY), &ctx.t("events.gallery")));
    html.close("article");

    PageBody::ok(title, html.finish())
}

/// Detail page of one course, or a not-found message.
pub(crate) fn render_course(ctx: &PageContext<'_>, id: &RecordId) -> PageBody {
    let Some((course, _)) = ctx.content.find_course(id) else {
        tracing::debug!(id = %id, "Course not found");
        return missing_record(ctx, "courses.notfound");
    };
    let record = resolve_record(course, &ctx.translator, &ctx.images);
    let title = record.text_or_empty(field::TITLE).to_string();
    let mut html = Html::new();

    html.open("section", &[("class", "hero course-hero")]);
    html.element("p", &[("class", "eyebrow")], &ctx.t("courses.subtitle"));
    html.element("h1", &[], &title);
    html.element("p", &[("class", "lead")], record.text_or_empty(field::SUMMARY));
    if let Some(url) = record.text(field::REGISTRATION_URL) {
        html.link(url, "button hero-register", &ctx.t("courses.registerNow"));
    }
    if let Some(src) = record.image(field::IMAGE).and_then(image_src) {
        html.void("img", &[("src", src.as_str()), ("alt", title.as_str()), ("class", "cover")]);
    }
    html.close("section");

    html.raw(&resources(ctx, &record));
    html.raw(&learning(ctx, &record));

    let objectives = record.list(field::OBJECTIVES);
    if !objectives.is_empty() {
        html.open("section", &[("class", "objectives")]);
        html.element("h2", &[], &ctx.t("courses.whyTitle"));
        html.open("div", &[("class", "grid")]);
        for objective in objectives {
            html.element("div", &[("class", "card")], objective);
        }
        html.close("div");
        html.close("section");
    }

    html.raw(&info_grid(ctx, &record));

    if let Some(video) = record.text(field::VIDEO_URL) {
        html.open("section", &[("class", "video")]);
        html.element("h2", &[], &ctx.t("courses.videoTitle"));
        html.open(
            "iframe",
            &[
                ("src", video),
                ("title", title.as_str()),
                ("allow", VIDEO_ALLOW),
                ("referrerpolicy", "strict-origin-when-cross-origin"),
                ("allowfullscreen", ""),
            ],
        );
        html.close("iframe");
        html.close("section");
    }

    html.raw(&gallery(&title, record.gallery(field::GALLERY), &ctx.t("courses.detail.gallery")));

    html.open("section", &[("class", "cta")]);
    html.element("h2", &[], &ctx.t("courses.ctaTitle"));
    html.element("p", &[], &ctx.t("courses.ctaSubtitle"));
    match record.text(field::REGISTRATION_URL) {
        Some(url) => html.link(url, "button", &ctx.t("courses.registerNow")),
        None => html.link(
            &ctx.href(&Route::Contact),
            "button",
            &ctx.t("courses.detail.contactToRegister"),
        ),
    };
    html.close("section");

    html.link(&ctx.href(&Route::Events), "button ghost back", &ctx.t("courses.back"));

    PageBody::ok(title, html.finish())
}

/// Schedule and survival guide downloads, when the course has them.
fn resources(ctx: &PageContext<'_>, record: &DisplayRecord) -> String {
    let links = [
        (field::SCHEDULE_URL, "schedule", "scheduleDesc", "viewSchedule"),
        (field::SURVIVAL_GUIDE_URL, "survivalGuide", "survivalGuideDesc", "viewGuide"),
    ];
    if links.iter().all(|(name, ..)| record.text(name).is_none()) {
        return String::new();
    }

    let mut html = Html::new();
    html.open("section", &[("class", "resources")]);
    html.element("h2", &[], &ctx.t("courses.resources.title"));
    html.open("div", &[("class", "grid")]);
    for (name, heading, description, action) in links {
        let Some(url) = record.text(name) else {
            continue;
        };
        html.open("div", &[("class", "card resource")]);
        html.element("h3", &[], &ctx.t(&format!("courses.resources.{heading}")));
        html.element("p", &[("class", "muted")], &ctx.t(&format!("courses.resources.{description}")));
        html.link(url, "button block", &ctx.t(&format!("courses.resources.{action}")));
        html.close("div");
    }
    html.close("div");
    html.close("section");

    html.finish()
}

/// "What you will learn" cards followed by the agenda.
fn learning(ctx: &PageContext<'_>, record: &DisplayRecord) -> String {
    let topics = record.list(field::WHAT_YOU_WILL_LEARN);
    if topics.is_empty() {
        return String::new();
    }

    let mut html = Html::new();
    html.open("section", &[("class", "learn")]);
    html.element("h2", &[], &ctx.t("courses.learnTitle"));
    html.open("div", &[("class", "grid")]);
    for topic in topics {
        html.element("h3", &[("class", "card topic")], topic);
    }
    html.close("div");

    let agenda = record.agenda(field::AGENDA);
    if !agenda.is_empty() {
        html.open("ol", &[("class", "agenda")]);
        for entry in agenda {
            html.open("li", &[]);
            html.element("strong", &[("class", "time")], &entry.time);
            html.element("p", &[("class", "muted")], &entry.activity);
            html.close("li");
        }
        html.close("ol");
    }
    html.close("section");

    html.finish()
}

/// Date, location, hours and price as a definition list.
fn info_grid(ctx: &PageContext<'_>, record: &DisplayRecord) -> String {
    let hours = record
        .count(field::HOURS)
        .map(|hours| format!("{hours} {}", ctx.t("courses.hours")))
        .unwrap_or_default();
    let cells = [
        ("courses.detail.date", record.text_or_empty(field::DATE)),
        ("courses.detail.location", record.text_or_empty(field::LOCATION)),
        ("courses.detail.hours", hours.as_str()),
        ("courses.detail.price", record.text_or_empty(field::PRICE)),
    ];

    let mut html = Html::new();
    html.open("section", &[("class", "course-info")]);
    html.element("h2", &[], &ctx.t("courses.detail.info"));
    html.open("dl", &[("class", "grid")]);
    for (label_key, value) in cells {
        html.open("div", &[]);
        html.element("dt", &[], &ctx.t(label_key));
        html.element("dd", &[("class", "muted")], value);
        html.close("div");
    }
    html.close("dl");
    html.close("section");

    html.finish()
}

/// Photo grid anchored at `#gallery`; empty when there are no photos.
fn gallery(title: &str, photos: &[ImageValue], heading: &str) -> String {
    if photos.is_empty() {
        return String::new();
    }

    let mut html = Html::new();
    html.open("section", &[("id", "gallery"), ("class", "gallery")]);
    html.element("h2", &[], heading);
    html.open("div", &[("class", "grid photos")]);
    for (index, src) in photos.iter().filter_map(image_src).enumerate() {
        let alt = format!("{title} - {}", index + 1);
        html.open("a", &[("href", src.as_str()), ("target", "_blank"), ("rel", "noopener")]);
        html.void("img", &[("src", src.as_str()), ("alt", alt.as_str()), ("loading", "lazy")]);
        html.close("a");
    }
    html.close("div");
    html.close("section");

    html.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use googletest::prelude::*;
    use rstest::*;

    use crate::assets::catalog::ImageCatalog;
    use crate::assets::resolver::ImageResolver;
    use crate::i18n::translator::Translator;
    use crate::input::content::{
        AgendaItem,
        ContentStore,
        CourseRecord,
    };
    use crate::input::site::SiteProfile;
    use crate::pages::{
        PageStatus,
        RenderedPage,
        Route,
        render_page,
    };
    use crate::test_utils::{
        sample_content,
        sample_course,
        sample_dictionary,
    };
    use crate::types::{
        Language,
        RecordId,
    };

    fn render(content: &ContentStore, route: &Route, language: Language) -> RenderedPage {
        let dictionary = sample_dictionary();
        let catalog = ImageCatalog::from_paths(
            Path::new("/site"),
            ["assets/event-workshop.jpg", "assets/courses/web/photo-1.jpg"],
        );

        render_page(
            Translator::new(&dictionary, language),
            ImageResolver::new(&catalog),
            content,
            &SiteProfile::default(),
            route,
        )
    }

    fn full_course() -> CourseRecord {
        CourseRecord {
            schedule_url: Some("https://example.com/schedule.pdf".to_string()),
            video_url: Some("https://www.youtube.com/embed/abc".to_string()),
            registration_url: Some("https://forms.example.com/web".to_string()),
            what_you_will_learn: Some(vec!["courses.web.learn.html".to_string()]),
            agenda: Some(vec![AgendaItem {
                time: "09:00".to_string(),
                activity_key: "courses.web.agenda.welcome".to_string(),
            }]),
            objectives: Some(vec!["courses.web.objective.portfolio".to_string()]),
            gallery: Some(vec!["courses/web/photo-1.jpg".to_string()]),
            ..sample_course("web")
        }
    }

    #[googletest::test]
    fn test_event_detail() {
        let page = render(&sample_content(), &Route::EventDetail(RecordId::from("1")), Language::En);

        expect_that!(page.status, eq(PageStatus::Ok));
        expect_that!(page.title, starts_with("AI Workshop | "));
        expect_that!(page.html, contains_substring("<h1>AI Workshop</h1>"));
        expect_that!(page.html, contains_substring("<li class=\"date\">March 15</li>"));
        expect_that!(page.html, contains_substring("src=\"/assets/event-workshop.jpg\""));
        expect_that!(page.html, contains_substring("href=\"/en/contact/\""));
        expect_that!(page.html, not(contains_substring("id=\"gallery\"")));
    }

    #[googletest::test]
    fn test_event_detail_is_localized() {
        let page = render(&sample_content(), &Route::EventDetail(RecordId::from("1")), Language::Es);

        expect_that!(page.html, contains_substring("<h1>Taller de IA</h1>"));
        expect_that!(page.html, contains_substring("Aprende IA"));
    }

    #[googletest::test]
    fn test_course_detail_sections() {
        let content = ContentStore { courses_upcoming: vec![full_course()], ..ContentStore::default() };

        let page = render(&content, &Route::CourseDetail(RecordId::from("web")), Language::En);

        expect_that!(page.html, contains_substring("<h1>Web development course</h1>"));
        expect_that!(page.html, contains_substring("href=\"https://example.com/schedule.pdf\""));
        expect_that!(page.html, not(contains_substring("courses.resources.viewGuide")));
        expect_that!(page.html, contains_substring("<strong class=\"time\">09:00</strong>"));
        expect_that!(page.html, contains_substring("courses.web.objective.portfolio"));
        expect_that!(page.html, contains_substring("<dd class=\"muted\">40 courses.hours</dd>"));
        expect_that!(page.html, contains_substring("<dd class=\"muted\">50€</dd>"));
        expect_that!(page.html, contains_substring("src=\"https://www.youtube.com/embed/abc\""));
        expect_that!(page.html, contains_substring("<section id=\"gallery\" class=\"gallery\">"));
        expect_that!(page.html, contains_substring("src=\"/assets/courses/web/photo-1.jpg\""));
        expect_that!(page.html, contains_substring("alt=\"Web development course - 1\""));
        expect_that!(page.html, contains_substring("href=\"https://forms.example.com/web\""));
    }

    #[googletest::test]
    fn test_course_hero_offers_registration() {
        let content = ContentStore { courses_upcoming: vec![full_course()], ..ContentStore::default() };

        let page = render(&content, &Route::CourseDetail(RecordId::from("web")), Language::En);
        let (_, after_hero_start) = page.html.split_once("course-hero").unwrap();
        let hero = after_hero_start.split("</section>").next().unwrap();

        expect_that!(
            hero,
            contains_substring("href=\"https://forms.example.com/web\" class=\"button hero-register\"")
        );
        expect_that!(page.html.matches("href=\"https://forms.example.com/web\"").count(), eq(2));
    }

    #[googletest::test]
    fn test_course_without_extras_omits_sections() {
        let page = render(&sample_content(), &Route::CourseDetail(RecordId::from("web")), Language::En);

        expect_that!(page.status, eq(PageStatus::Ok));
        expect_that!(page.html, not(contains_substring("class=\"resources\"")));
        expect_that!(page.html, not(contains_substring("<iframe")));
        expect_that!(page.html, not(contains_substring("class=\"learn\"")));
        expect_that!(page.html, contains_substring("courses.detail.contactToRegister"));
        expect_that!(page.html, not(contains_substring("hero-register")));
    }

    #[rstest]
    #[case::event(Route::EventDetail(RecordId::from("42")), "Event not found")]
    #[case::course(Route::CourseDetail(RecordId::from("nope")), "Course not found")]
    fn missing_record_shows_localized_message(#[case] route: Route, #[case] message: &str) {
        let page = render(&sample_content(), &route, Language::En);

        assert_that!(page.status, eq(PageStatus::NotFound));
        assert_that!(page.html, contains_substring(message));
        assert_that!(page.html, contains_substring("href=\"/en/events/\""));
    }
}
