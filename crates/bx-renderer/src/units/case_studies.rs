use serde::Deserialize;

use super::Render;
use super::common::{Text, render_list, text};
use crate::html::{element, header};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CaseStudiesProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    items: Vec<CaseStudy>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CaseStudy {
    title: Option<Text>,
    #[serde(alias = "company")]
    client: Option<Text>,
    industry: Option<Text>,
    description: Option<Text>,
    challenge: Option<Text>,
    solution: Option<Text>,
    results: Vec<Text>,
}

impl Render for CaseStudiesProps {
    fn render(&self, out: &mut String) {
        header(out, text(self.title.as_ref()), text(self.subtitle.as_ref()), None);
        for study in &self.items {
            out.push_str(r#"<article class="case-study">"#);
            element(out, "h3", None, text(study.title.as_ref()));
            element(out, "p", Some("client"), text(study.client.as_ref()));
            element(out, "p", Some("industry"), text(study.industry.as_ref()));
            element(out, "p", None, text(study.description.as_ref()));
            element(out, "p", Some("challenge"), text(study.challenge.as_ref()));
            element(out, "p", Some("solution"), text(study.solution.as_ref()));
            render_list(out, "results", &study.results);
            out.push_str("</article>");
        }
    }
}
