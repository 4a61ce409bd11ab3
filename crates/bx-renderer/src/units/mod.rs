//! Rendering units.
//!
//! A unit reads typed props from the section's shaped prop bag at the kind's
//! `props_root` and writes HTML. Kinds of the same [`Unit`] share markup.

mod case_studies;
mod cards;
mod common;
mod cta;
mod faq;
mod hero;
mod people;
mod pricing;
mod seo;
mod stats;
mod steps;
mod timeline;

use std::fmt::Write;

use bx_sections::{ComponentEntry, Unit};
use serde::Deserialize;
use serde_json::Value;

/// Shaped props that a unit could not read.
#[derive(Debug, thiserror::Error)]
#[error("invalid props for {unit} unit: {source}")]
pub struct UnitError {
    unit: &'static str,
    #[source]
    source: serde_json::Error,
}

/// Markup for one unit's typed props.
trait Render {
    fn render(&self, out: &mut String);
}

/// Render `props` with the unit of `entry`.
///
/// Nothing is written when the props cannot be read.
pub(crate) fn render_unit(
    entry: &ComponentEntry,
    props: &Value,
    out: &mut String,
) -> Result<(), UnitError> {
    let scoped = scope(props, entry.props_root);
    match entry.unit {
        Unit::Hero => draw::<hero::HeroProps>(entry.unit, scoped, out),
        Unit::CardGrid => draw::<cards::CardGridProps>(entry.unit, scoped, out),
        Unit::Steps => draw::<steps::StepsProps>(entry.unit, scoped, out),
        Unit::Faq => draw::<faq::FaqProps>(entry.unit, scoped, out),
        Unit::Cta => draw::<cta::CtaProps>(entry.unit, scoped, out),
        Unit::Button => draw::<cta::ButtonProps>(entry.unit, scoped, out),
        Unit::Pricing => draw::<pricing::PricingProps>(entry.unit, scoped, out),
        Unit::Stats => draw::<stats::StatsProps>(entry.unit, scoped, out),
        Unit::Team => draw::<people::TeamProps>(entry.unit, scoped, out),
        Unit::Testimonials => draw::<people::TestimonialsProps>(entry.unit, scoped, out),
        Unit::Timeline => draw::<timeline::TimelineProps>(entry.unit, scoped, out),
        Unit::CaseStudies => draw::<case_studies::CaseStudiesProps>(entry.unit, scoped, out),
        Unit::Seo => draw::<seo::SeoProps>(entry.unit, scoped, out),
    }
}

fn draw<'a, T>(unit: Unit, value: &'a Value, out: &mut String) -> Result<(), UnitError>
where
    T: Deserialize<'a> + Default + Render,
{
    let props = Option::<T>::deserialize(value)
        .map_err(|source| UnitError {
            unit: unit.name(),
            source,
        })?
        .unwrap_or_default();
    write!(out, r#"<div class="unit unit-{}">"#, unit.name()).unwrap();
    props.render(out);
    out.push_str("</div>");
    Ok(())
}

/// Value at a dot-separated root; missing roots read as null.
fn scope<'a>(props: &'a Value, root: Option<&str>) -> &'a Value {
    static NULL: Value = Value::Null;
    match root {
        Some(root) => props
            .pointer(&format!("/{}", root.replace('.', "/")))
            .unwrap_or(&NULL),
        None => props,
    }
}
