use serde::Deserialize;

use super::Render;
use super::common::{Button, Card, Text, text};
use crate::html::header;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CtaProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    description: Option<Text>,
    cta_button: Option<Button>,
    features: Vec<Card>,
}

impl Render for CtaProps {
    fn render(&self, out: &mut String) {
        header(
            out,
            text(self.title.as_ref()),
            text(self.subtitle.as_ref()),
            text(self.description.as_ref()),
        );
        if !self.features.is_empty() {
            out.push_str(r#"<ul class="cards">"#);
            for feature in &self.features {
                feature.render(out);
            }
            out.push_str("</ul>");
        }
        if let Some(button) = &self.cta_button {
            button.render(out);
        }
    }
}

/// Standalone button unit; the whole prop bag is the button.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub(crate) struct ButtonProps(Button);

impl Render for ButtonProps {
    fn render(&self, out: &mut String) {
        self.0.render(out);
    }
}
