//! Section data model.

use serde::{Deserialize, Deserializer};

/// Free-form property bag attached to a section.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// Color scheme a section is rendered with.
///
/// Stored as a numeric code: `1` is light, anything else is dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Theme for a stored numeric code.
    #[must_use]
    pub fn from_code(code: Option<i64>) -> Self {
        if code == Some(1) { Self::Light } else { Self::Dark }
    }

    /// Value of the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// One renderable block of a page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Identifier unique within the page and stable across edits.
    pub uid: String,
    /// Type tag, either a legacy flat id or a free-form name.
    pub component_id: String,
    /// Explicit registry path, overriding the legacy id mapping.
    #[serde(default)]
    pub component_path: Option<String>,
    /// Property bag, schema depends on `component_id`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub props: Props,
    /// Color scheme.
    #[serde(default, deserialize_with = "theme_from_code")]
    pub theme: Theme,
    /// Visibility flag; absent means visible.
    #[serde(default, rename = "isVisible")]
    pub is_visible: Option<bool>,
}

impl Section {
    /// Create a visible section with the default theme.
    #[must_use]
    pub fn new(uid: impl Into<String>, component_id: impl Into<String>, props: Props) -> Self {
        Self {
            uid: uid.into(),
            component_id: component_id.into(),
            component_path: None,
            props,
            theme: Theme::default(),
            is_visible: None,
        }
    }

    /// Set an explicit registry path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.component_path = Some(path.into());
        self
    }

    /// Whether the section takes part in rendering.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.is_visible.unwrap_or(true)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Props, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Props>::deserialize(deserializer)?.unwrap_or_default())
}

fn theme_from_code<'de, D>(deserializer: D) -> Result<Theme, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Theme::from_code(Option::<i64>::deserialize(deserializer)?))
}
