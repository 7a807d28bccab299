//! About page: mission, vision, the local board and the chapter history.

use super::html::Html;
use super::{
    PageBody,
    PageContext,
};
use crate::resolve::record::resolve_all;
use crate::resolve::schema::field;

/// History paragraph keys, in order.
const HISTORY_PARAGRAPHS: [&str; 3] = ["about.history.p1", "about.history.p2", "about.history.p3"];

/// Mission, vision, board and history.
pub(crate) fn render(ctx: &PageContext<'_>) -> PageBody {
    let title = ctx.t("about.title");
    let mut html = Html::new();

    html.open("section", &[("class", "hero")]);
    html.element("h1", &[], &title);
    html.element("p", &[("class", "lead")], &ctx.t("home.about.subtitle"));
    html.close("section");

    html.open("section", &[("class", "mission-vision grid")]);
    for block in ["about.mission", "about.vision"] {
        html.open("div", &[("class", "card")]);
        html.element("h2", &[], &ctx.t(&format!("{block}.title")));
        html.element("p", &[("class", "muted")], &ctx.t(&format!("{block}.text")));
        html.close("div");
    }
    html.close("section");

    let members = resolve_all(&ctx.content.board_members, &ctx.translator, &ctx.images);
    html.open("section", &[("class", "board")]);
    html.element("h2", &[], &ctx.t("about.board.title"));
    html.element("p", &[("class", "muted")], &ctx.t("about.board.subtitle"));
    html.open("div", &[("class", "grid")]);
    for member in &members {
        html.open("div", &[("class", "card member")]);
        match member.image(field::IMAGE).and_then(|image| image.resolved.as_ref()) {
            Some(source) if source.is_loadable() => {
                html.void(
                    "img",
                    &[
                        ("src", source.src().as_str()),
                        ("alt", member.text_or_empty(field::NAME)),
                        ("class", "avatar"),
                    ],
                );
            }
            Some(source) => {
                html.element("div", &[("class", "avatar")], &source.src());
            }
            None => {}
        }
        html.element("h3", &[], member.text_or_empty(field::NAME));
        html.element("p", &[("class", "position")], member.text_or_empty(field::POSITION));
        if let Some(quote) = member.text(field::QUOTE) {
            html.element("p", &[("class", "quote")], &format!("\u{201c}{quote}\u{201d}"));
        }
        html.close("div");
    }
    html.close("div");
    html.close("section");

    html.open("section", &[("class", "history")]);
    html.element("h2", &[], &ctx.t("about.history.title"));
    for key in HISTORY_PARAGRAPHS {
        html.element("p", &[("class", "muted")], &ctx.t(key));
    }
    html.close("section");

    PageBody::ok(title, html.finish())
}
