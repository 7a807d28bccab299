//! Contact page and the contact form.
//!
//! Submission is simulated: a valid form produces the success notification
//! and is cleared, nothing is delivered anywhere.

use super::html::Html;
use super::shell::social_links;
use super::{
    PageBody,
    PageContext,
};
use crate::i18n::translator::Translator;

/// Inline handler mirroring [`ContactForm::submit`] in the browser.
/// Whitespace-only values count as blank, like in `submit`.
const SUBMIT_SCRIPT: &str = "document.getElementById('contact-form').addEventListener('submit',\
function(e){e.preventDefault();var status=document.getElementById('contact-status');\
if(Array.prototype.some.call(this.elements,function(f){return f.required&&!f.value.trim();}))\
{status.hidden=true;return;}\
this.reset();status.hidden=false;});";

/// Result of submitting the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The localized success notification.
    Sent(String),
    /// Names of the required fields left blank.
    MissingFields(Vec<&'static str>),
}

/// Field values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Field names, their label keys and whether they are multi-line.
    pub const FIELDS: [(&'static str, &'static str, bool); 3] = [
        ("name", "contact.form.name", false),
        ("email", "contact.form.email", false),
        ("message", "contact.form.message", true),
    ];

    /// Simulates sending the form.
    ///
    /// Every field must be non-blank. On success the form is cleared and the
    /// notification text is returned in the translator's language.
    pub fn submit(&mut self, translator: &Translator<'_>) -> FormOutcome {
        let missing: Vec<&'static str> = Self::FIELDS
            .iter()
            .map(|(name, ..)| *name)
            .filter(|name| self.value(name).is_some_and(|value| value.trim().is_empty()))
            .collect();

        if !missing.is_empty() {
            tracing::debug!(?missing, "Contact form incomplete");
            return FormOutcome::MissingFields(missing);
        }

        tracing::info!("Contact form submitted");
        *self = Self::default();
        FormOutcome::Sent(translator.text("contact.form.success"))
    }

    /// Value of the field called `name`.
    fn value(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "message" => Some(&self.message),
            _ => None,
        }
    }
}

/// Contact details, social links, the form and the map.
pub(crate) fn render(ctx: &PageContext<'_>) -> PageBody {
    let title = ctx.t("contact.title");
    let contact = &ctx.profile.contact;
    let mut html = Html::new();

    html.open("section", &[("class", "hero")]);
    html.element("h1", &[], &title);
    html.element("p", &[("class", "lead")], &ctx.t("contact.subtitle"));
    html.close("section");

    html.open("div", &[("class", "grid contact-grid")]);

    html.open("section", &[("class", "card contact-info")]);
    html.element("h2", &[], &ctx.t("contact.info.title"));
    html.open("dl", &[]);
    html.element("dt", &[], &ctx.t("contact.info.email"));
    html.open("dd", &[]);
    html.link(&format!("mailto:{}", contact.email), "contact-link", &contact.email);
    html.close("dd");
    if !contact.phone.is_empty() {
        let tel: String = contact.phone.chars().filter(|c| !c.is_whitespace()).collect();
        html.element("dt", &[], &ctx.t("contact.info.phone"));
        html.open("dd", &[]);
        html.link(&format!("tel:{tel}"), "contact-link", &contact.phone);
        html.close("dd");
    }
    html.element("dt", &[], &ctx.t("contact.info.location"));
    html.open("dd", &[]);
    html.element("p", &[], &ctx.t("contact.info.location.text"));
    for line in &contact.address_lines {
        html.element("p", &[("class", "muted")], line);
    }
    html.element("p", &[("class", "muted")], &ctx.t("contact.info.country"));
    html.close("dd");
    html.close("dl");

    if !ctx.content.social_links.is_empty() {
        html.element("h3", &[], &ctx.t("contact.social"));
        html.raw(&social_links(ctx, "contact-social"));
    }
    html.close("section");

    html.raw(&form(ctx));
    html.close("div");

    if let Some(map_url) = &contact.map_url {
        html.open("section", &[("class", "map")]);
        html.open(
            "iframe",
            &[
                ("src", map_url.as_str()),
                ("title", ctx.t("contact.info.location").as_str()),
                ("loading", "lazy"),
                ("referrerpolicy", "no-referrer-when-downgrade"),
            ],
        );
        html.close("iframe");
        html.close("section");
    }

    PageBody::ok(title, html.finish())
}

/// The contact form with its success notice.
fn form(ctx: &PageContext<'_>) -> String {
    let mut html = Html::new();

    html.open("section", &[("class", "card contact-form")]);
    html.element("h2", &[], &ctx.t("contact.form.title"));
    html.open("form", &[("id", "contact-form")]);
    for (name, label_key, multiline) in ContactForm::FIELDS {
        let id = format!("contact-{name}");
        let input_type = if name == "email" { "email" } else { "text" };
        html.element("label", &[("for", id.as_str())], &ctx.t(label_key));
        if multiline {
            html.open("textarea", &[("id", id.as_str()), ("name", name), ("rows", "5"), ("required", "")]);
            html.close("textarea");
        } else {
            html.void(
                "input",
                &[("id", id.as_str()), ("name", name), ("type", input_type), ("required", "")],
            );
        }
    }
    html.element("button", &[("type", "submit"), ("class", "button")], &ctx.t("contact.form.send"));
    html.close("form");
    html.element(
        "p",
        &[("id", "contact-status"), ("class", "notice"), ("role", "status"), ("hidden", "")],
        &ctx.t("contact.form.success"),
    );
    html.open("script", &[]);
    html.raw(SUBMIT_SCRIPT);
    html.close("script");
    html.close("section");

    html.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::assets::catalog::ImageCatalog;
    use crate::assets::resolver::ImageResolver;
    use crate::config::ContactConfig;
    use crate::input::dictionary::Dictionary;
    use crate::input::site::SiteProfile;
    use crate::pages::{
        Route,
        render_page,
    };
    use crate::test_utils::sample_content;
    use crate::types::Language;

    #[fixture]
    fn dictionary() -> Dictionary {
        Dictionary::from_entries([
            (Language::Es, "contact.form.success", "¡Mensaje enviado!"),
            (Language::En, "contact.form.success", "Message sent!"),
            (Language::En, "contact.title", "Contact"),
        ])
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Hola".to_string(),
        }
    }

    #[rstest]
    #[case::spanish(Language::Es, "¡Mensaje enviado!")]
    #[case::english(Language::En, "Message sent!")]
    fn submit_clears_form_and_notifies(
        dictionary: Dictionary,
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        let mut form = filled();

        let outcome = form.submit(&Translator::new(&dictionary, language));

        assert_that!(outcome, eq(&FormOutcome::Sent(expected.to_string())));
        assert_that!(form, eq(&ContactForm::default()));
    }

    #[rstest]
    fn submit_rejects_blank_fields(dictionary: Dictionary) {
        let mut form = ContactForm { email: "   ".to_string(), message: String::new(), ..filled() };

        let outcome = form.submit(&Translator::new(&dictionary, Language::En));

        assert_that!(outcome, eq(&FormOutcome::MissingFields(vec!["email", "message"])));
        assert_that!(form.name, eq("Ana"));
    }

    #[rstest]
    fn contact_page_lists_info_and_form(dictionary: Dictionary) {
        let content = sample_content();
        let catalog = ImageCatalog::default();
        let profile = SiteProfile {
            contact: ContactConfig {
                phone: "+34 928 45 10 00".to_string(),
                map_url: Some("https://maps.example.com/embed".to_string()),
                ..ContactConfig::default()
            },
            ..SiteProfile::default()
        };

        let page = render_page(
            Translator::new(&dictionary, Language::En),
            ImageResolver::new(&catalog),
            &content,
            &profile,
            &Route::Contact,
        );

        assert_that!(page.title, starts_with("Contact | "));
        assert_that!(page.html, contains_substring("href=\"tel:+34928451000\""));
        assert_that!(page.html, contains_substring("src=\"https://maps.example.com/embed\""));
        assert_that!(page.html, contains_substring("<form id=\"contact-form\">"));
        assert_that!(page.html, contains_substring("<textarea id=\"contact-message\" name=\"message\""));
        assert_that!(page.html, contains_substring("hidden=\"\">Message sent!</p>"));
        assert_that!(page.html, contains_substring("class=\"contact-social\""));
    }

    #[googletest::test]
    fn form_markup_requires_every_field() {
        let dictionary = Dictionary::new();
        let content = sample_content();
        let catalog = ImageCatalog::default();

        let html = render_page(
            Translator::new(&dictionary, Language::Es),
            ImageResolver::new(&catalog),
            &content,
            &SiteProfile::default(),
            &Route::Contact,
        )
        .html;

        expect_that!(html, not(contains_substring("novalidate")));
        for (name, _, _) in ContactForm::FIELDS {
            expect_that!(
                html,
                contains_substring(format!("id=\"contact-{name}\" name=\"{name}\""))
            );
        }
        expect_that!(html.matches("required=\"\"").count(), eq(ContactForm::FIELDS.len()));
        expect_that!(html, contains_substring("!f.value.trim()"));
    }
}
