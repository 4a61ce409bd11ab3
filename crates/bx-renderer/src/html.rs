//! HTML escaping and small markup helpers shared by units.

use std::fmt::Write;

/// Escape text for use in HTML content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Write `<tag class="class">text</tag>` if `text` is present.
pub(crate) fn element(out: &mut String, tag: &str, class: Option<&str>, text: Option<&str>) {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return;
    };
    match class {
        Some(class) => write!(out, r#"<{tag} class="{class}">{}</{tag}>"#, escape_html(text)),
        None => write!(out, "<{tag}>{}</{tag}>", escape_html(text)),
    }
    .unwrap();
}

/// Write the common heading block: `<h2>` title, subtitle and description.
pub(crate) fn header(
    out: &mut String,
    title: Option<&str>,
    subtitle: Option<&str>,
    description: Option<&str>,
) {
    element(out, "h2", None, title);
    element(out, "p", Some("subtitle"), subtitle);
    element(out, "p", Some("description"), description);
}
