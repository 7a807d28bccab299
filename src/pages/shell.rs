//! Document frame: head, header navigation, footer.

use super::html::Html;
use super::route::Route;
use super::{
    PageBody,
    PageContext,
    PageStatus,
};
use crate::types::Language;

/// Wraps `main` in the full document for the current route.
pub(crate) fn document(ctx: &PageContext<'_>, title: &str, main: &str) -> String {
    let language = ctx.language();
    let mut html = Html::new();

    html.raw("<!DOCTYPE html>\n");
    html.open("html", &[("lang", language.code())]);
    html.open("head", &[]);
    html.void("meta", &[("charset", "utf-8")]);
    html.void("meta", &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")]);
    html.element("title", &[], title);
    if *ctx.route != Route::NotFound {
        for alternate in Language::ALL {
            html.void(
                "link",
                &[
                    ("rel", "alternate"),
                    ("hreflang", alternate.code()),
                    ("href", ctx.route.href(alternate).as_str()),
                ],
            );
        }
    }
    html.close("head");

    html.open("body", &[]);
    html.raw(&header(ctx));
    html.open("main", &[("id", "content")]);
    html.raw(main);
    html.close("main");
    html.raw(&footer(ctx));
    html.close("body");
    html.close("html");

    html.finish()
}

/// Brand, navigation, language switch and partner link.
fn header(ctx: &PageContext<'_>) -> String {
    let language = ctx.language();
    let mut html = Html::new();

    html.open("header", &[("class", "site-header")]);
    html.open("nav", &[("class", "container")]);

    html.open("a", &[("href", ctx.href(&Route::Home).as_str()), ("class", "brand")]);
    html.element("span", &[("class", "brand-mark")], "B");
    html.element("span", &[("class", "brand-name")], &ctx.profile.site_name);
    html.close("a");

    html.open("ul", &[("class", "nav-links")]);
    for route in &Route::NAVIGATION {
        let Some(key) = route.nav_key() else {
            continue;
        };
        let active = route == ctx.route;
        html.open("li", &[]);
        html.element(
            "a",
            &[
                ("href", ctx.href(route).as_str()),
                ("class", if active { "nav-link active" } else { "nav-link" }),
                if active { ("aria-current", "page") } else { ("", "") },
            ],
            &ctx.t(key),
        );
        html.close("li");
    }
    html.close("ul");

    html.open("ul", &[("class", "language-switch")]);
    for option in Language::ALL {
        let current = option == language;
        html.open("li", &[]);
        html.element(
            "a",
            &[
                ("href", ctx.route.href(option).as_str()),
                ("hreflang", option.code()),
                ("lang", option.code()),
                if current { ("aria-current", "true") } else { ("", "") },
            ],
            &format!("{} {}", option.flag(), option.native_name()),
        );
        html.close("li");
    }
    html.close("ul");

    if let Some(partner) = &ctx.profile.partner_link {
        html.link(&partner.href, "partner-link", &partner.label);
    }

    html.close("nav");
    html.close("header");
    html.finish()
}

/// Quick links, contact details, social links and copyright.
fn footer(ctx: &PageContext<'_>) -> String {
    let contact = &ctx.profile.contact;
    let mut html = Html::new();

    html.open("footer", &[("class", "site-footer")]);
    html.open("div", &[("class", "container footer-grid")]);

    html.open("section", &[]);
    html.element("h3", &[], &ctx.t("footer.quick"));
    html.open("ul", &[]);
    for route in &Route::NAVIGATION {
        if let Some(key) = route.nav_key() {
            html.open("li", &[]);
            html.link(&ctx.href(route), "footer-link", &ctx.t(key));
            html.close("li");
        }
    }
    html.close("ul");
    html.close("section");

    html.open("section", &[]);
    html.element("h3", &[], &ctx.t("contact.info.title"));
    html.open("p", &[]);
    html.link(&format!("mailto:{}", contact.email), "footer-link", &contact.email);
    html.close("p");
    html.element("p", &[], &ctx.t("contact.info.location.text"));

    if !ctx.content.social_links.is_empty() {
        html.element("h4", &[], &ctx.t("footer.social"));
        html.raw(&social_links(ctx, "footer-social"));
    }
    html.close("section");

    html.close("div");
    html.element(
        "p",
        &[("class", "copyright")],
        &format!("© {} {}. {}", ctx.profile.year, ctx.profile.site_name, ctx.t("footer.rights")),
    );
    html.close("footer");
    html.finish()
}

/// Social links list, shared by the footer and the contact page.
pub(crate) fn social_links(ctx: &PageContext<'_>, class: &str) -> String {
    let mut html = Html::new();

    html.open("ul", &[("class", class)]);
    for social in &ctx.content.social_links {
        html.open("li", &[]);
        html.element(
            "a",
            &[
                ("href", social.href.as_str()),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
                ("aria-label", social.label.as_str()),
                ("data-icon", social.icon.as_str()),
            ],
            &social.label,
        );
        html.close("li");
    }
    html.close("ul");
    html.finish()
}

/// Page for paths that match no route.
pub(crate) fn not_found(ctx: &PageContext<'_>) -> PageBody {
    let title = ctx.t("notfound.title");
    let mut html = Html::new();

    html.open("section", &[("class", "not-found")]);
    html.element("h1", &[], "404");
    html.element("p", &[], &ctx.t("notfound.message"));
    html.link(&ctx.href(&Route::Home), "button", &ctx.t("notfound.back"));
    html.close("section");

    PageBody { title, main: html.finish(), status: PageStatus::NotFound }
}

/// A centered message used when a detail record does not exist.
pub(crate) fn missing_record(ctx: &PageContext<'_>, message_key: &str) -> PageBody {
    let message = ctx.t(message_key);
    let mut html = Html::new();

    html.open("section", &[("class", "not-found")]);
    html.element("p", &[("class", "muted")], &message);
    html.link(&ctx.href(&Route::Events), "button ghost", &ctx.t("nav.events"));
    html.close("section");

    PageBody { title: message, main: html.finish(), status: PageStatus::NotFound }
}
