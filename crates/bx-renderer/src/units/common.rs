//! Lenient prop types shared by several units.

use std::fmt::Write;

use serde::{Deserialize, Deserializer};

use crate::html::{element, escape_html};

/// Display text that may be stored as a string, number or boolean.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Text(String);

impl Text {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Int(i64),
            Float(f64),
            Bool(bool),
        }

        Ok(Self(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s,
            Raw::Int(n) => n.to_string(),
            Raw::Float(n) => n.to_string(),
            Raw::Bool(b) => b.to_string(),
        }))
    }
}

/// Present, non-empty text of an optional field.
pub(crate) fn text(field: Option<&Text>) -> Option<&str> {
    field.map(Text::as_str).filter(|s| !s.is_empty())
}

/// Call-to-action button, stored either as a label or as an object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Button {
    pub(crate) text: Option<Text>,
    pub(crate) link: Option<Text>,
    pub(crate) variant: Option<Text>,
}

impl<'de> Deserialize<'de> for Button {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Fields {
            #[serde(default, alias = "label")]
            text: Option<Text>,
            #[serde(default, alias = "href", alias = "url")]
            link: Option<Text>,
            #[serde(default)]
            variant: Option<Text>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Label(Text),
            Fields(Fields),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Label(text) => Self {
                text: Some(text),
                ..Self::default()
            },
            Raw::Fields(f) => Self {
                text: f.text,
                link: f.link,
                variant: f.variant,
            },
        })
    }
}

impl Button {
    /// Write the button as a link. Buttons without text are skipped.
    pub(crate) fn render(&self, out: &mut String) {
        let Some(label) = text(self.text.as_ref()) else {
            return;
        };
        let href = text(self.link.as_ref()).unwrap_or("/contact");
        let variant = text(self.variant.as_ref()).unwrap_or("primary");
        write!(
            out,
            r#"<a class="btn btn-{}" href="{}">{}</a>"#,
            escape_html(variant),
            escape_html(href),
            escape_html(label)
        )
        .unwrap();
    }
}

/// Grid card, stored either as a bare label or as an object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Card {
    pub(crate) title: Option<Text>,
    pub(crate) description: Option<Text>,
    pub(crate) icon: Option<Text>,
    pub(crate) image: Option<Text>,
    pub(crate) link: Option<Text>,
    pub(crate) features: Vec<Text>,
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Fields {
            #[serde(default, alias = "name")]
            title: Option<Text>,
            #[serde(default, alias = "desc")]
            description: Option<Text>,
            #[serde(default)]
            icon: Option<Text>,
            #[serde(default)]
            image: Option<Text>,
            #[serde(default, alias = "href")]
            link: Option<Text>,
            #[serde(default)]
            features: Vec<Text>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Label(Text),
            Fields(Fields),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Label(title) => Self {
                title: Some(title),
                ..Self::default()
            },
            Raw::Fields(f) => Self {
                title: f.title,
                description: f.description,
                icon: f.icon,
                image: f.image,
                link: f.link,
                features: f.features,
            },
        })
    }
}

impl Card {
    pub(crate) fn render(&self, out: &mut String) {
        out.push_str(r#"<li class="card">"#);
        if let Some(image) = text(self.image.as_ref()) {
            write!(out, r#"<img src="{}" alt="">"#, escape_html(image)).unwrap();
        }
        element(out, "span", Some("icon"), text(self.icon.as_ref()));
        match (text(self.title.as_ref()), text(self.link.as_ref())) {
            (Some(title), Some(link)) => write!(
                out,
                r#"<h3><a href="{}">{}</a></h3>"#,
                escape_html(link),
                escape_html(title)
            )
            .unwrap(),
            (title, _) => element(out, "h3", None, title),
        }
        element(out, "p", None, text(self.description.as_ref()));
        render_list(out, "features", &self.features);
        out.push_str("</li>");
    }
}

/// Write a `<ul>` of text items; empty lists are skipped.
pub(crate) fn render_list(out: &mut String, class: &str, items: &[Text]) {
    if items.is_empty() {
        return;
    }
    write!(out, r#"<ul class="{class}">"#).unwrap();
    for item in items {
        element(out, "li", None, Some(item.as_str()));
    }
    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_accepts_scalars() {
        let values: Vec<Text> = serde_json::from_value(json!(["a", 3, 1.5, true])).unwrap();

        let strings: Vec<_> = values.iter().map(Text::as_str).collect();
        assert_eq!(strings, vec!["a", "3", "1.5", "true"]);
    }

    #[test]
    fn test_text_rejects_objects() {
        assert!(serde_json::from_value::<Text>(json!({"a": 1})).is_err());
    }

    #[test]
    fn test_button_from_label() {
        let button: Button = serde_json::from_value(json!("Contact")).unwrap();

        assert_eq!(button.text, Some(Text("Contact".to_owned())));
        assert!(button.link.is_none());
    }

    #[test]
    fn test_button_render_defaults() {
        let button: Button = serde_json::from_value(json!({"text": "Go"})).unwrap();
        let mut out = String::new();

        button.render(&mut out);

        assert_eq!(out, r#"<a class="btn btn-primary" href="/contact">Go</a>"#);
    }

    #[test]
    fn test_button_without_text_renders_nothing() {
        let button: Button = serde_json::from_value(json!({"link": "/x"})).unwrap();
        let mut out = String::new();

        button.render(&mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn test_card_from_label_and_object() {
        let cards: Vec<Card> =
            serde_json::from_value(json!(["Plain", {"name": "Named", "desc": "D"}])).unwrap();

        assert_eq!(cards[0].title, Some(Text("Plain".to_owned())));
        assert_eq!(cards[1].title, Some(Text("Named".to_owned())));
        assert_eq!(cards[1].description, Some(Text("D".to_owned())));
    }

    #[test]
    fn test_card_render_with_link() {
        let card: Card =
            serde_json::from_value(json!({"title": "Payroll", "link": "/payroll"})).unwrap();
        let mut out = String::new();

        card.render(&mut out);

        assert_eq!(
            out,
            r#"<li class="card"><h3><a href="/payroll">Payroll</a></h3></li>"#
        );
    }
}
