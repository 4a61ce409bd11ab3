use serde::Deserialize;

use super::Render;
use super::common::{Text, text};
use crate::html::{element, header};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StatsProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    stats: Vec<Stat>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Stat {
    #[serde(alias = "number")]
    value: Option<Text>,
    #[serde(alias = "title")]
    label: Option<Text>,
    description: Option<Text>,
}

impl Render for StatsProps {
    fn render(&self, out: &mut String) {
        header(out, text(self.title.as_ref()), text(self.subtitle.as_ref()), None);
        if self.stats.is_empty() {
            return;
        }
        out.push_str(r#"<dl class="stats">"#);
        for stat in &self.stats {
            out.push_str(r#"<div class="stat">"#);
            element(out, "dt", None, text(stat.value.as_ref()));
            element(out, "dd", None, text(stat.label.as_ref()));
            element(out, "dd", Some("description"), text(stat.description.as_ref()));
            out.push_str("</div>");
        }
        out.push_str("</dl>");
    }
}
