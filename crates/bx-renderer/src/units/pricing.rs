use std::fmt::Write;

use serde::Deserialize;

use super::Render;
use super::common::{Text, render_list, text};
use crate::html::{element, header};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PricingProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    plans: Vec<Plan>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Plan {
    #[serde(alias = "title")]
    name: Option<Text>,
    price: Option<Text>,
    period: Option<Text>,
    description: Option<Text>,
    features: Vec<Text>,
    #[serde(alias = "popular")]
    highlighted: bool,
    #[serde(alias = "buttonText")]
    cta_text: Option<Text>,
}

impl Render for PricingProps {
    fn render(&self, out: &mut String) {
        header(out, text(self.title.as_ref()), text(self.subtitle.as_ref()), None);
        if self.plans.is_empty() {
            return;
        }
        out.push_str(r#"<div class="plans">"#);
        for plan in &self.plans {
            let class = if plan.highlighted { "plan plan-highlighted" } else { "plan" };
            write!(out, r#"<div class="{class}">"#).unwrap();
            element(out, "h3", None, text(plan.name.as_ref()));
            if let Some(price) = text(plan.price.as_ref()) {
                out.push_str(r#"<p class="price">"#);
                element(out, "span", Some("amount"), Some(price));
                element(out, "span", Some("period"), text(plan.period.as_ref()));
                out.push_str("</p>");
            }
            element(out, "p", None, text(plan.description.as_ref()));
            render_list(out, "features", &plan.features);
            element(out, "span", Some("btn btn-primary"), text(plan.cta_text.as_ref()));
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }
}
