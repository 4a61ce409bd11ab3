use std::fmt::Write;

use serde::{Deserialize, Deserializer};

use super::Render;
use super::common::{Text, text};
use crate::html::{element, header};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StepsProps {
    title: Option<Text>,
    description: Option<Text>,
    steps: Vec<Step>,
}

#[derive(Debug, Default)]
struct Step {
    number: Option<Text>,
    title: Option<Text>,
    description: Option<Text>,
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Fields {
            #[serde(default, alias = "step")]
            number: Option<Text>,
            #[serde(default, alias = "name")]
            title: Option<Text>,
            #[serde(default, alias = "desc")]
            description: Option<Text>,
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
                number: f.number,
                title: f.title,
                description: f.description,
            },
        })
    }
}

impl Render for StepsProps {
    fn render(&self, out: &mut String) {
        header(out, text(self.title.as_ref()), None, text(self.description.as_ref()));
        if self.steps.is_empty() {
            return;
        }
        out.push_str(r#"<ol class="steps">"#);
        for (index, step) in self.steps.iter().enumerate() {
            out.push_str(r#"<li class="step">"#);
            match text(step.number.as_ref()) {
                Some(number) => element(out, "span", Some("step-number"), Some(number)),
                None => write!(out, r#"<span class="step-number">{}</span>"#, index + 1).unwrap(),
            }
            element(out, "h3", None, text(step.title.as_ref()));
            element(out, "p", None, text(step.description.as_ref()));
            out.push_str("</li>");
        }
        out.push_str("</ol>");
    }
}
