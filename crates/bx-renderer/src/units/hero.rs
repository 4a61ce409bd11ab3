use std::fmt::Write;

use serde::Deserialize;

use super::Render;
use super::common::{Button, Text, text};
use crate::html::{element, escape_html};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct HeroProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    description: Option<Text>,
    background_image: Option<Text>,
    background_video: Option<Text>,
    cta_button: Option<Button>,
}

impl Render for HeroProps {
    fn render(&self, out: &mut String) {
        if let Some(video) = text(self.background_video.as_ref()) {
            write!(
                out,
                r#"<video class="hero-background" src="{}" autoplay muted loop playsinline></video>"#,
                escape_html(video)
            )
            .unwrap();
        } else if let Some(image) = text(self.background_image.as_ref()) {
            write!(
                out,
                r#"<img class="hero-background" src="{}" alt="">"#,
                escape_html(image)
            )
            .unwrap();
        }
        out.push_str(r#"<div class="hero-content">"#);
        element(out, "h1", None, text(self.title.as_ref()));
        element(out, "p", Some("subtitle"), text(self.subtitle.as_ref()));
        element(out, "p", Some("description"), text(self.description.as_ref()));
        if let Some(button) = &self.cta_button {
            button.render(out);
        }
        out.push_str("</div>");
    }
}
