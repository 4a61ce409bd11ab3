//! Landing page.

use crate::adapter::Binding;
use crate::kind::{ComponentEntry, SectionKind, Unit};

pub(crate) static HERO: ComponentEntry = ComponentEntry {
    kind: SectionKind::LandingHero,
    path: "Hero",
    unit: Unit::Hero,
    props_root: None,
    legacy_ids: &["Hero", "HeroSection"],
    adapter: &[
        Binding::text("title", &["slides.0.title"]),
        Binding::text("subtitle", &["slides.0.subtitle"]),
        Binding::text("description", &["slides.0.description"]),
        Binding::text("backgroundImage", &["bgImage", "image"]),
        Binding::text("backgroundVideo", &["bgVideo", "video"]),
        Binding::any("ctaButton", &["cta"]),
    ],
    required: &["title"],
};

pub(crate) static SERVICES: ComponentEntry = ComponentEntry {
    kind: SectionKind::LandingServices,
    path: "Services",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["Services", "ServicesSection"],
    adapter: &[
        Binding::text("title", &[]).or("Our Services"),
        Binding::text("subtitle", &["description"]),
        Binding::list("items", &["services"]),
    ],
    required: &["items"],
};

pub(crate) static TESTIMONIALS: ComponentEntry = ComponentEntry {
    kind: SectionKind::LandingTestimonials,
    path: "Testimonials",
    unit: Unit::Testimonials,
    props_root: None,
    legacy_ids: &["Testimonials", "TestimonialsSection"],
    adapter: &[
        Binding::text("title", &[]).or("What Our Clients Say"),
        Binding::text("subtitle", &["description"]),
        Binding::list("testimonials", &["items", "reviews"]),
    ],
    required: &["testimonials"],
};

pub(crate) static INDUSTRIES: ComponentEntry = ComponentEntry {
    kind: SectionKind::LandingIndustries,
    path: "Industries",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["Industries", "IndustriesSection"],
    adapter: &[
        Binding::text("title", &[]).or("Industries We Serve"),
        Binding::text("subtitle", &["description"]),
        Binding::list("items", &["industries"]),
    ],
    required: &["items"],
};
