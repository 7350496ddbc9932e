//! Minimal HTML writer.

/// Escapes HTML special characters in text content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// Append-only HTML buffer. Text and attribute values are always escaped.
#[derive(Debug, Default)]
pub struct HtmlBuffer {
    buffer: String,
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.tag(tag, attrs);
        self.buffer.push('>');
        self
    }

    /// A tag without a closing counterpart (`<input>`, `<img>`).
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open(tag, attrs)
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(&escape(text));
        self
    }

    /// `<tag attrs>text</tag>`
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    /// Splice already-rendered markup.
    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.buffer.push_str(html);
        self
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    fn tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        for (key, value) in attrs {
            self.buffer.push(' ');
            self.buffer.push_str(key);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&escape(value));
            self.buffer.push('"');
        }
    }
}

/// Wrap `body` in a complete document.
pub fn page(title: &str, body: &str) -> String {
    let mut out = HtmlBuffer::new();
    out.raw("<!DOCTYPE html>")
        .open("html", &[("lang", "en")])
        .open("head", &[])
        .void("meta", &[("charset", "utf-8")])
        .element("title", &[], title)
        .close("head")
        .open("body", &[])
        .raw(body)
        .close("body")
        .close("html");
    out.finish()
}
