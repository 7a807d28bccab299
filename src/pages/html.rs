//! Minimal HTML writer. Every text and attribute value is escaped.

/// Escapes text for use in element content and quoted attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Appends markup to a string buffer.
#[derive(Debug, Default)]
pub struct Html {
    /// Markup written so far.
    buf: String,
}

impl Html {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `tag` with the given attributes. Attributes with an empty name
    /// are skipped.
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.push_attrs(attrs);
        self.buf.push('>');
        self
    }

    /// Writes `</tag>`.
    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str(&format!("</{tag}>"));
        self
    }

    /// Writes a void element such as `img` or `input`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open(tag, attrs)
    }

    /// Writes escaped text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_html(text));
        self
    }

    /// Writes `<tag attrs>text</tag>`.
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    /// Writes a link. External links open in a new tab.
    pub fn link(&mut self, href: &str, class: &str, text: &str) -> &mut Self {
        if href.starts_with("http") {
            self.element(
                "a",
                &[
                    ("href", href),
                    ("class", class),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                ],
                text,
            )
        } else {
            self.element("a", &[("href", href), ("class", class)], text)
        }
    }

    /// Appends trusted markup produced by another `Html`.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// The markup written.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }

    /// Writes ` name="value"` pairs, skipping empty names.
    fn push_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            if name.is_empty() {
                continue;
            }
            self.buf.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
        }
    }
}
