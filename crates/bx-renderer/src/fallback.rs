//! Generic block for sections without a rendering unit.
//!
//! Reads the raw prop bag directly and shows whichever well-known keys are
//! present. Never fails, whatever the shape of the props.

use std::fmt::Write;

use bx_sections::Section;
use serde_json::Value;

use crate::html::{element, escape_html};

/// Marker shown in every fallback block.
pub const NOT_FOUND_ANNOTATION: &str = "(Component not found)";

const LIST_KEYS: [(&str, &str, &str); 3] = [
    ("features", "ul", "fallback-features"),
    ("workflow", "ol", "fallback-workflow"),
    ("steps", "ol", "fallback-steps"),
];

/// Write the fallback block for `section`.
pub fn render_fallback(section: &Section, out: &mut String) {
    let props = &section.props;
    out.push_str(r#"<div class="fallback">"#);
    if let Some(image) = scalar(props.get("backgroundImage")) {
        write!(
            out,
            r#"<img class="fallback-background" src="{}" alt="">"#,
            escape_html(&image)
        )
        .unwrap();
    }
    element(out, "h2", None, scalar(props.get("title")).as_deref());
    element(out, "p", Some("subtitle"), scalar(props.get("subtitle")).as_deref());
    element(
        out,
        "p",
        Some("description"),
        scalar(props.get("description")).as_deref(),
    );
    for (key, tag, class) in LIST_KEYS {
        if let Some(Value::Array(items)) = props.get(key) {
            render_items(out, tag, class, items);
        }
    }
    element(
        out,
        "span",
        Some("btn btn-primary"),
        scalar(props.get("ctaText")).as_deref(),
    );
    write!(
        out,
        r#"<p class="fallback-note">{NOT_FOUND_ANNOTATION} <code>{}</code></p>"#,
        escape_html(&section.component_id)
    )
    .unwrap();
    out.push_str("</div>");
}

fn render_items(out: &mut String, tag: &str, class: &str, items: &[Value]) {
    let labels: Vec<String> = items.iter().filter_map(label).collect();
    if labels.is_empty() {
        return;
    }
    write!(out, r#"<{tag} class="{class}">"#).unwrap();
    for text in &labels {
        element(out, "li", None, Some(text.as_str()));
    }
    write!(out, "</{tag}>").unwrap();
}

fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Display label of a list item: the item itself, or its title-like key.
fn label(item: &Value) -> Option<String> {
    scalar(Some(item)).or_else(|| {
        let fields = item.as_object()?;
        ["title", "name", "label", "text", "question"]
            .iter()
            .find_map(|key| scalar(fields.get(*key)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn section(props: Value) -> Section {
        Section::new("s1", "MysterySection", props.as_object().unwrap().clone())
    }

    #[test]
    fn test_empty_props_show_only_annotation() {
        let mut out = String::new();

        render_fallback(&section(json!({})), &mut out);

        assert_eq!(
            out,
            concat!(
                r#"<div class="fallback">"#,
                r#"<p class="fallback-note">(Component not found) <code>MysterySection</code></p>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_known_keys_are_shown() {
        let mut out = String::new();

        render_fallback(
            &section(json!({
                "title": "Why us",
                "subtitle": "Reasons",
                "features": ["Fast", {"title": "Local"}, {"icon": "x"}],
                "workflow": [{"name": "Plan"}],
                "ctaText": "Call",
                "backgroundImage": "/bg.jpg"
            })),
            &mut out,
        );

        assert_eq!(
            out,
            concat!(
                r#"<div class="fallback">"#,
                r#"<img class="fallback-background" src="/bg.jpg" alt="">"#,
                "<h2>Why us</h2>",
                r#"<p class="subtitle">Reasons</p>"#,
                r#"<ul class="fallback-features"><li>Fast</li><li>Local</li></ul>"#,
                r#"<ol class="fallback-workflow"><li>Plan</li></ol>"#,
                r#"<span class="btn btn-primary">Call</span>"#,
                r#"<p class="fallback-note">(Component not found) <code>MysterySection</code></p>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_odd_shapes_are_ignored() {
        let mut out = String::new();

        render_fallback(
            &section(json!({"title": {"nested": true}, "steps": "not a list", "description": null})),
            &mut out,
        );

        assert!(!out.contains("<h2>"));
        assert!(!out.contains("fallback-steps"));
        assert!(out.contains(NOT_FOUND_ANNOTATION));
    }

    #[test]
    fn test_component_id_is_escaped() {
        let mut out = String::new();
        let section = Section::new("s1", "<script>", Default::default());

        render_fallback(&section, &mut out);

        assert!(out.contains("<code>&lt;script&gt;</code>"));
    }
}
