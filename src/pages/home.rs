//! Home page.

use super::html::Html;
use super::route::Route;
use super::{
    PageBody,
    PageContext,
};

/// Headline figures and their label keys.
const STATS: [(&str, &str); 3] = [
    ("3000+", "home.stats.students"),
    ("20+", "home.stats.events"),
    ("90+", "home.stats.universities"),
];

/// Value keys; descriptions live under `<key>.desc`.
const VALUES: [&str; 3] =
    ["home.values.education", "home.values.culture", "home.values.cooperation"];

/// Hero, figures, about BEST, values and a call to action.
pub(crate) fn render(ctx: &PageContext<'_>) -> PageBody {
    let contact_href = ctx.href(&Route::Contact);
    let mut html = Html::new();

    html.open("section", &[("class", "hero")]);
    html.element("h1", &[], &ctx.t("home.hero.title"));
    html.element("p", &[("class", "lead")], &ctx.t("home.hero.subtitle"));
    html.open("div", &[("class", "actions")]);
    html.link(&contact_href, "button", &ctx.t("home.hero.cta"));
    html.link(&ctx.href(&Route::About), "button outline", &ctx.t("home.hero.learn"));
    html.close("div");
    html.close("section");

    html.open("section", &[("class", "stats")]);
    for (value, label_key) in STATS {
        html.open("div", &[("class", "card stat")]);
        html.element("strong", &[("class", "stat-value")], value);
        html.element("span", &[("class", "muted")], &ctx.t(label_key));
        html.close("div");
    }
    html.close("section");

    html.open("section", &[("class", "about-best")]);
    html.element("h2", &[], &ctx.t("home.about.title"));
    html.element("p", &[("class", "subtitle")], &ctx.t("home.about.subtitle"));
    html.element("p", &[("class", "muted")], &ctx.t("home.about.description"));
    html.open("div", &[("class", "card local-group")]);
    html.element("h3", &[], &ctx.t("home.local.title"));
    html.element("p", &[("class", "muted")], &ctx.t("home.local.description"));
    html.close("div");
    html.close("section");

    html.open("section", &[("class", "values")]);
    html.element("h2", &[], &ctx.t("home.values.title"));
    html.open("div", &[("class", "grid")]);
    for key in VALUES {
        html.open("div", &[("class", "card")]);
        html.element("h3", &[], &ctx.t(key));
        html.element("p", &[("class", "muted")], &ctx.t(&format!("{key}.desc")));
        html.close("div");
    }
    html.close("div");
    html.close("section");

    html.open("section", &[("class", "cta")]);
    html.element("h2", &[], &ctx.t("home.hero.cta"));
    html.element("p", &[], &ctx.t("home.hero.subtitle"));
    html.link(&contact_href, "button", &ctx.t("nav.contact"));
    html.close("section");

    PageBody::ok(String::new(), html.finish())
}
