use serde::Deserialize;

use super::Render;
use super::common::{Card, Text, text};
use crate::html::header;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CardGridProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    description: Option<Text>,
    items: Vec<Card>,
}

impl Render for CardGridProps {
    fn render(&self, out: &mut String) {
        header(
            out,
            text(self.title.as_ref()),
            text(self.subtitle.as_ref()),
            text(self.description.as_ref()),
        );
        if self.items.is_empty() {
            return;
        }
        out.push_str(r#"<ul class="cards">"#);
        for card in &self.items {
            card.render(out);
        }
        out.push_str("</ul>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_render_mixed_cards() {
        let props: CardGridProps = serde_json::from_value(json!({
            "title": "Integrations",
            "items": ["REST", {"title": "EDI", "description": "Batch files"}]
        }))
        .unwrap();
        let mut out = String::new();

        props.render(&mut out);

        assert_eq!(
            out,
            concat!(
                "<h2>Integrations</h2>",
                r#"<ul class="cards">"#,
                r#"<li class="card"><h3>REST</h3></li>"#,
                r#"<li class="card"><h3>EDI</h3><p>Batch files</p></li>"#,
                "</ul>"
            )
        );
    }

    #[test]
    fn test_empty_grid_has_no_list() {
        let props: CardGridProps = serde_json::from_value(json!({"title": "T"})).unwrap();
        let mut out = String::new();

        props.render(&mut out);

        assert_eq!(out, "<h2>T</h2>");
    }
}
