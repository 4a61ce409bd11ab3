//! Full HTML document wrapper.

use std::fmt::Write;

use crate::html::escape_html;

/// HTML5 document around a rendered body.
#[derive(Clone, Debug)]
pub struct Document {
    title: String,
    body: String,
    stylesheets: Vec<String>,
    scripts: Vec<String>,
}

impl Document {
    /// Create a document with the given title and body HTML.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Link a stylesheet in the document head.
    #[must_use]
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    /// Load a script at the end of the body.
    #[must_use]
    pub fn script(mut self, src: impl Into<String>) -> Self {
        self.scripts.push(src.into());
        self
    }

    /// Render the complete document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        writeln!(out, "<title>{}</title>", escape_html(&self.title)).unwrap();
        for href in &self.stylesheets {
            writeln!(out, r#"<link rel="stylesheet" href="{}">"#, escape_html(href)).unwrap();
        }
        out.push_str("</head>\n<body>\n<main>");
        out.push_str(&self.body);
        out.push_str("</main>\n");
        for src in &self.scripts {
            writeln!(out, r#"<script src="{}"></script>"#, escape_html(src)).unwrap();
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_body() {
        let html = Document::new("Home & Co", "<p>hi</p>").render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Home &amp; Co</title>"));
        assert!(html.contains("<main><p>hi</p></main>"));
    }

    #[test]
    fn test_assets() {
        let html = Document::new("T", "")
            .stylesheet("/assets/site.css")
            .script("/preview.js")
            .render();

        assert!(html.contains(r#"<link rel="stylesheet" href="/assets/site.css">"#));
        assert!(html.contains(r#"<script src="/preview.js"></script>"#));
    }
}
