//! Team members and client testimonials.

use std::fmt::Write;

use serde::Deserialize;

use super::Render;
use super::common::{Text, text};
use crate::html::{element, escape_html, header};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TeamProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    members: Vec<Member>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Member {
    name: Option<Text>,
    #[serde(alias = "position", alias = "designation")]
    role: Option<Text>,
    #[serde(alias = "description")]
    bio: Option<Text>,
    image: Option<Text>,
}

impl Render for TeamProps {
    fn render(&self, out: &mut String) {
        header(out, text(self.title.as_ref()), text(self.subtitle.as_ref()), None);
        if self.members.is_empty() {
            return;
        }
        out.push_str(r#"<ul class="team">"#);
        for member in &self.members {
            out.push_str(r#"<li class="member">"#);
            if let Some(image) = text(member.image.as_ref()) {
                write!(
                    out,
                    r#"<img src="{}" alt="{}">"#,
                    escape_html(image),
                    escape_html(text(member.name.as_ref()).unwrap_or_default())
                )
                .unwrap();
            }
            element(out, "h3", None, text(member.name.as_ref()));
            element(out, "p", Some("role"), text(member.role.as_ref()));
            element(out, "p", None, text(member.bio.as_ref()));
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TestimonialsProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    testimonials: Vec<Testimonial>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Testimonial {
    #[serde(alias = "text", alias = "content")]
    quote: Option<Text>,
    #[serde(alias = "name")]
    author: Option<Text>,
    #[serde(alias = "position")]
    role: Option<Text>,
    company: Option<Text>,
}

impl Render for TestimonialsProps {
    fn render(&self, out: &mut String) {
        header(out, text(self.title.as_ref()), text(self.subtitle.as_ref()), None);
        for testimonial in &self.testimonials {
            let Some(quote) = text(testimonial.quote.as_ref()) else {
                continue;
            };
            out.push_str(r#"<figure class="testimonial">"#);
            element(out, "blockquote", None, Some(quote));
            let attribution = [
                text(testimonial.author.as_ref()),
                text(testimonial.role.as_ref()),
                text(testimonial.company.as_ref()),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
            element(out, "figcaption", None, Some(&attribution));
            out.push_str("</figure>");
        }
    }
}
