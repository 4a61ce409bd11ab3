//! Page documents as returned by the backend.
//!
//! Two layouts exist. Current pages carry `sections`, each already shaped
//! like a [`Section`]. Pages saved by the older builder carry `components`
//! with a `componentType` and JSON content, which are normalised into
//! sections here.

use bx_sections::{Props, Section, Theme};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Page document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageData {
    /// Page title, if the backend stores one.
    pub title: Option<String>,
    /// Sections in stored order.
    pub sections: Vec<Section>,
}

impl PageData {
    /// Parse a response body: either `{ "data": { ... } }` or a bare page.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON or the page is malformed.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        match value.get("data") {
            Some(data) if data.is_object() => Self::deserialize(data),
            _ => Self::deserialize(&value),
        }
    }
}

impl<'de> Deserialize<'de> for PageData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            title: Option<String>,
            #[serde(default)]
            sections: Option<Vec<Section>>,
            #[serde(default)]
            components: Option<Vec<ComponentRecord>>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let sections = match raw.components {
            Some(components) => components
                .into_iter()
                .enumerate()
                .map(|(index, record)| record.into_section(index))
                .collect(),
            None => raw.sections.unwrap_or_default(),
        };
        Ok(Self {
            title: raw.title,
            sections,
        })
    }
}

/// Entry of the older `components` layout.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentRecord {
    component_type: String,
    #[serde(default)]
    content_json: Option<Value>,
    #[serde(default)]
    content: Option<Value>,
    #[serde(default)]
    theme: Option<i64>,
    #[serde(default)]
    is_visible: Option<bool>,
}

impl ComponentRecord {
    fn into_section(self, index: usize) -> Section {
        let props = match (self.content_json, self.content) {
            (Some(json), _) if is_truthy(&json) => parse_content_json(json, &self.component_type),
            (_, Some(Value::Object(content))) => content,
            _ => Props::new(),
        };
        let mut section = Section::new(format!("component-{index}"), self.component_type, props);
        section.theme = Theme::from_code(self.theme);
        section.is_visible = self.is_visible;
        section
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Content may be stored as a JSON object or as a string holding one.
fn parse_content_json(json: Value, component_type: &str) -> Props {
    match json {
        Value::Object(props) => props,
        Value::String(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(component_type, error = %e, "Failed to parse contentJson");
            Props::new()
        }),
        _ => Props::new(),
    }
}
