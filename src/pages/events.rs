//! Events page: course and event catalogs split by period, sponsors and
//! testimonials.

use super::html::Html;
use super::route::Route;
use super::{
    PageBody,
    PageContext,
    image_src,
};
use crate::resolve::record::{
    DisplayRecord,
    resolve_all,
};
use crate::resolve::schema::{
    ContentSchema,
    field,
};
use crate::types::Period;

/// One tab of the catalog: a category split into upcoming and past.
struct Catalog<'a, R> {
    /// Section id.
    anchor: &'static str,
    /// Dictionary prefix of the section texts.
    key_prefix: &'static str,
    /// Records not yet held.
    upcoming: &'a [R],
    /// Records already held.
    past: &'a [R],
    /// Detail route of a record.
    detail: fn(&DisplayRecord) -> Route,
}

/// Courses, events, sponsors and testimonials.
pub(crate) fn render(ctx: &PageContext<'_>) -> PageBody {
    let title = ctx.t("events.title");
    let content = ctx.content;
    let mut html = Html::new();

    html.open("section", &[("class", "hero")]);
    html.element("h1", &[], &title);
    html.element("p", &[("class", "lead")], &ctx.t("events.subtitle"));
    html.close("section");

    html.open("nav", &[("class", "tabs"), ("aria-label", title.as_str())]);
    html.link("#courses", "tab", &ctx.t("courses.title"));
    html.link("#events", "tab", &ctx.t("events.title"));
    html.close("nav");

    html.raw(&catalog(
        ctx,
        &Catalog {
            anchor: "courses",
            key_prefix: "courses",
            upcoming: &content.courses_upcoming,
            past: &content.courses_past,
            detail: |record| Route::CourseDetail(record.id.clone()),
        },
    ));
    html.raw(&catalog(
        ctx,
        &Catalog {
            anchor: "events",
            key_prefix: "events",
            upcoming: &content.events_upcoming,
            past: &content.events_past,
            detail: |record| Route::EventDetail(record.id.clone()),
        },
    ));

    html.raw(&sponsors(ctx));
    html.raw(&testimonials(ctx));

    PageBody::ok(title, html.finish())
}

/// One catalog split into upcoming and past cards.
fn catalog<R: ContentSchema>(ctx: &PageContext<'_>, catalog: &Catalog<'_, R>) -> String {
    let mut html = Html::new();

    html.open("section", &[("id", catalog.anchor), ("class", "catalog")]);
    html.element("h2", &[], &ctx.t(&format!("{}.title", catalog.key_prefix)));
    for (period, records) in [(Period::Upcoming, catalog.upcoming), (Period::Past, catalog.past)] {
        let heading = if period.is_past() { "past" } else { "upcoming" };
        html.element("h3", &[], &ctx.t(&format!("{}.{heading}", catalog.key_prefix)));

        if records.is_empty() {
            html.element("p", &[("class", "muted")], &ctx.t("events.empty"));
            continue;
        }

        html.open("div", &[("class", "grid cards")]);
        for record in resolve_all(records, &ctx.translator, &ctx.images) {
            let detail = (catalog.detail)(&record);
            html.raw(&card(ctx, &record, period, &detail));
        }
        html.close("div");
    }
    html.close("section");

    html.finish()
}

/// Card for one event or course.
fn card(ctx: &PageContext<'_>, record: &DisplayRecord, period: Period, detail: &Route) -> String {
    let detail_href = ctx.href(detail);
    let title = record.text_or_empty(field::TITLE);
    let mut html = Html::new();

    html.open("article", &[("class", "card event-card")]);
    if let Some(src) = record.image(field::IMAGE).and_then(image_src) {
        html.void("img", &[("src", src.as_str()), ("alt", title), ("loading", "lazy")]);
    }

    if let Some(label) = record.text(field::KIND_LABEL) {
        let class = format!("badge badge-{}", record.text_or_empty(field::KIND));
        html.element("span", &[("class", class.as_str())], label);
    }

    html.open("h3", &[]);
    html.link(&detail_href, "card-title", title);
    html.close("h3");
    let description = record.text(field::SUMMARY).or_else(|| record.text(field::DESCRIPTION));
    html.element("p", &[("class", "muted")], description.unwrap_or_default());

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

    html.open("div", &[("class", "card-actions")]);
    if period.is_past() {
        html.link(&format!("{detail_href}#gallery"), "button outline", &ctx.t("events.gallery"));
    } else {
        let register_href = record
            .text(field::REGISTRATION_URL)
            .map_or_else(|| detail_href.clone(), str::to_string);
        html.link(&register_href, "button", &ctx.t("events.register"));
    }
    html.close("div");
    html.close("article");

    html.finish()
}

/// Current and past sponsors.
fn sponsors(ctx: &PageContext<'_>) -> String {
    let content = ctx.content;
    if content.sponsors_current.is_empty() && content.sponsors_past.is_empty() {
        return String::new();
    }

    let mut html = Html::new();
    html.open("section", &[("class", "sponsors")]);
    html.element("h2", &[], &ctx.t("sponsors.title"));
    for (heading_key, sponsors) in
        [("sponsors.current", &content.sponsors_current), ("sponsors.past", &content.sponsors_past)]
    {
        if sponsors.is_empty() {
            continue;
        }
        html.element("h3", &[], &ctx.t(heading_key));
        html.open("ul", &[("class", "sponsor-logos")]);
        for sponsor in resolve_all(sponsors, &ctx.translator, &ctx.images) {
            let name = sponsor.text_or_empty(field::NAME);
            html.open("li", &[]);
            let logo = sponsor.image(field::LOGO).and_then(image_src);
            match (sponsor.text(field::URL), logo) {
                (Some(url), Some(src)) => {
                    html.open(
                        "a",
                        &[("href", url), ("target", "_blank"), ("rel", "noopener noreferrer")],
                    );
                    html.void("img", &[("src", src.as_str()), ("alt", name)]);
                    html.close("a");
                }
                (None, Some(src)) => {
                    html.void("img", &[("src", src.as_str()), ("alt", name)]);
                }
                (Some(url), None) => {
                    html.link(url, "sponsor-name", name);
                }
                (None, None) => {
                    html.element("span", &[("class", "sponsor-name")], name);
                }
            }
            if let Some(description) = sponsor.text(field::DESCRIPTION) {
                html.element("p", &[("class", "muted")], description);
            }
            html.close("li");
        }
        html.close("ul");
    }
    html.close("section");

    html.finish()
}

/// Testimonial quotes.
fn testimonials(ctx: &PageContext<'_>) -> String {
    if ctx.content.testimonials.is_empty() {
        return String::new();
    }

    let mut html = Html::new();
    html.open("section", &[("class", "testimonials")]);
    html.element("h2", &[], &ctx.t("testimonials.title"));
    html.open("div", &[("class", "grid")]);
    for testimonial in resolve_all(&ctx.content.testimonials, &ctx.translator, &ctx.images) {
        html.open("blockquote", &[("class", "card")]);
        html.element(
            "p",
            &[("class", "quote")],
            &format!("\u{201c}{}\u{201d}", testimonial.text_or_empty(field::QUOTE)),
        );
        html.open("footer", &[]);
        if let Some(src) = testimonial.image(field::IMAGE).and_then(image_src) {
            html.void(
                "img",
                &[("src", src.as_str()), ("alt", testimonial.text_or_empty(field::NAME))],
            );
        }
        html.element("strong", &[], testimonial.text_or_empty(field::NAME));
        html.element("span", &[("class", "muted")], testimonial.text_or_empty(field::ROLE));
        html.close("footer");
        html.close("blockquote");
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

    use crate::assets::catalog::ImageCatalog;
    use crate::assets::resolver::ImageResolver;
    use crate::i18n::translator::Translator;
    use crate::input::content::{
        EventRecord,
        TestimonialRecord,
    };
    use crate::input::site::SiteProfile;
    use crate::pages::{
        RenderedPage,
        Route,
        render_page,
    };
    use crate::test_utils::{
        sample_content,
        sample_dictionary,
        sample_event,
    };
    use crate::types::{
        Language,
        RecordId,
    };

    fn render_events(language: Language) -> RenderedPage {
        let dictionary = sample_dictionary();
        let mut content = sample_content();
        content.events_past.push(EventRecord {
            registration_url: None,
            kind: Some("hackathon".to_string()),
            ..sample_event(4)
        });
        content.events_upcoming[0].registration_url = Some("https://forms.example.com/ai".to_string());
        content.testimonials.push(TestimonialRecord {
            id: RecordId::from("1"),
            name: "María González".to_string(),
            role_key: "testimonials.maria.role".to_string(),
            quote_key: "testimonials.maria.quote".to_string(),
            image: None,
        });
        let catalog = ImageCatalog::from_paths(Path::new("/site"), ["assets/event-workshop.jpg"]);

        render_page(
            Translator::new(&dictionary, language),
            ImageResolver::new(&catalog),
            &content,
            &SiteProfile::default(),
            &Route::Events,
        )
    }

    #[googletest::test]
    fn test_upcoming_event_card() {
        let page = render_events(Language::En);

        expect_that!(page.html, contains_substring("<span class=\"badge badge-workshop\">Workshop</span>"));
        expect_that!(page.html, contains_substring("<a href=\"/en/events/1/\" class=\"card-title\">AI Workshop</a>"));
        expect_that!(page.html, contains_substring("src=\"/assets/event-workshop.jpg\""));
        expect_that!(page.html, contains_substring("href=\"https://forms.example.com/ai\""));
        expect_that!(page.html, contains_substring("40 events.participants"));
    }

    #[googletest::test]
    fn test_past_event_links_to_gallery_and_keeps_unknown_kind() {
        let page = render_events(Language::Es);

        expect_that!(page.html, contains_substring("href=\"/es/events/4/#gallery\""));
        expect_that!(page.html, contains_substring("<span class=\"badge badge-hackathon\">hackathon</span>"));
        expect_that!(page.html, contains_substring(">events.4.title<"));
    }

    #[googletest::test]
    fn test_courses_tab_links_to_course_detail() {
        let page = render_events(Language::En);

        expect_that!(page.html, contains_substring("<section id=\"courses\" class=\"catalog\">"));
        expect_that!(page.html, contains_substring("href=\"/en/courses/web/\""));
        expect_that!(page.html, contains_substring("Web development course"));
    }

    #[googletest::test]
    fn test_testimonials_and_empty_sponsors() {
        let page = render_events(Language::En);

        expect_that!(page.html, contains_substring("María González"));
        expect_that!(page.html, contains_substring("testimonials.maria.quote"));
        expect_that!(page.html, not(contains_substring("class=\"sponsors\"")));
    }
}
