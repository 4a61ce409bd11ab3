use serde::Deserialize;

use super::Render;
use super::common::{Text, text};
use crate::html::{element, header};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TimelineProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    items: Vec<Milestone>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Milestone {
    #[serde(alias = "date")]
    year: Option<Text>,
    title: Option<Text>,
    description: Option<Text>,
}

impl Render for TimelineProps {
    fn render(&self, out: &mut String) {
        header(out, text(self.title.as_ref()), text(self.subtitle.as_ref()), None);
        if self.items.is_empty() {
            return;
        }
        out.push_str(r#"<ol class="timeline">"#);
        for milestone in &self.items {
            out.push_str("<li>");
            element(out, "time", None, text(milestone.year.as_ref()));
            element(out, "h3", None, text(milestone.title.as_ref()));
            element(out, "p", None, text(milestone.description.as_ref()));
            out.push_str("</li>");
        }
        out.push_str("</ol>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_year() {
        let props: TimelineProps = serde_json::from_value(json!({
            "items": [{"year": 2015, "title": "Founded"}]
        }))
        .unwrap();
        let mut out = String::new();

        props.render(&mut out);

        assert_eq!(
            out,
            r#"<ol class="timeline"><li><time>2015</time><h3>Founded</h3></li></ol>"#
        );
    }
}
