//! Page metadata.
//!
//! Emits `<meta>` tags only; nothing visible.

use std::fmt::Write;

use serde::{Deserialize, Deserializer};

use super::Render;
use super::common::{Text, text};
use crate::html::escape_html;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SeoProps {
    title: Option<Text>,
    description: Option<Text>,
    #[serde(deserialize_with = "keywords")]
    keywords: Vec<Text>,
    image: Option<Text>,
}

/// Keywords as a list or a comma separated string.
fn keywords<'de, D>(deserializer: D) -> Result<Vec<Text>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<Text>),
        Joined(Text),
        None,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::List(list) => list,
        Raw::Joined(joined) => vec![joined],
        Raw::None => Vec::new(),
    })
}

fn meta(out: &mut String, attr: &str, key: &str, content: Option<&str>) {
    if let Some(content) = content {
        write!(
            out,
            r#"<meta {attr}="{key}" content="{}">"#,
            escape_html(content)
        )
        .unwrap();
    }
}

impl Render for SeoProps {
    fn render(&self, out: &mut String) {
        meta(out, "property", "og:title", text(self.title.as_ref()));
        meta(out, "name", "description", text(self.description.as_ref()));
        let keywords = self
            .keywords
            .iter()
            .map(Text::as_str)
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if !keywords.is_empty() {
            meta(out, "name", "keywords", Some(&keywords));
        }
        meta(out, "property", "og:image", text(self.image.as_ref()));
    }
}
