//! About page.

use crate::adapter::Binding;
use crate::kind::{ComponentEntry, SectionKind, Unit};

pub(crate) static HERO: ComponentEntry = ComponentEntry {
    kind: SectionKind::AboutHero,
    path: "About/AboutHero",
    unit: Unit::Hero,
    props_root: None,
    legacy_ids: &["AboutHeroSection"],
    adapter: &[
        Binding::text("title", &["hero.title"]).or("About Us"),
        Binding::text("subtitle", &["hero.subtitle"]),
        Binding::text("description", &["hero.description"]),
        Binding::text("backgroundImage", &["bgImage", "hero.backgroundImage"]),
        Binding::text("backgroundVideo", &["bgVideo", "hero.bgVideo"]),
    ],
    required: &["title"],
};

pub(crate) static MISSION: ComponentEntry = ComponentEntry {
    kind: SectionKind::AboutMission,
    path: "About/AboutMission",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["AboutMissionSection"],
    adapter: &[
        Binding::text("title", &[]).or("Our Mission"),
        Binding::text("subtitle", &[]),
        Binding::text("description", &["mission", "vision"]),
        Binding::list("items", &["missionPoints", "points"]),
    ],
    required: &["title"],
};

pub(crate) static TEAM: ComponentEntry = ComponentEntry {
    kind: SectionKind::AboutTeam,
    path: "About/AboutTeam",
    unit: Unit::Team,
    props_root: None,
    legacy_ids: &["AboutTeamSection"],
    adapter: &[
        Binding::text("title", &[]).or("Meet Our Team"),
        Binding::text("subtitle", &["description"]),
        Binding::list("members", &["teamMembers", "team"]),
    ],
    required: &["members"],
};

pub(crate) static VALUES: ComponentEntry = ComponentEntry {
    kind: SectionKind::AboutValues,
    path: "About/AboutValues",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["AboutValuesSection"],
    adapter: &[
        Binding::text("title", &[]).or("Our Values"),
        Binding::text("subtitle", &[]),
        Binding::list("items", &["values"]),
    ],
    required: &["items"],
};

pub(crate) static JOURNEY: ComponentEntry = ComponentEntry {
    kind: SectionKind::AboutJourney,
    path: "About/AboutJourney",
    unit: Unit::Timeline,
    props_root: None,
    legacy_ids: &["AboutJourneySection"],
    adapter: &[
        Binding::text("title", &[]).or("Our Journey"),
        Binding::text("subtitle", &["description"]),
        Binding::list("items", &["timeline", "milestones"]),
    ],
    required: &["items"],
};

pub(crate) static MILESTONES: ComponentEntry = ComponentEntry {
    kind: SectionKind::AboutMilestones,
    path: "About/AboutMilestones",
    unit: Unit::Stats,
    props_root: None,
    legacy_ids: &["AboutMilestonesSection"],
    adapter: &[
        Binding::text("title", &[]).or("Our Milestones"),
        Binding::text("subtitle", &["description"]),
        Binding::list("stats", &["milestones", "items"]),
    ],
    required: &["stats"],
};

pub(crate) static DIFFERENTIATORS: ComponentEntry = ComponentEntry {
    kind: SectionKind::AboutDifferentiators,
    path: "About/AboutDifferentiators",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["AboutDifferentiatorsSection"],
    adapter: &[
        Binding::text("title", &[]).or("What Sets Us Apart"),
        Binding::text("subtitle", &["description"]),
        Binding::list("items", &["differentiators"]),
    ],
    required: &["items"],
};

pub(crate) static CTA: ComponentEntry = ComponentEntry {
    kind: SectionKind::AboutCta,
    path: "About/AboutCTA",
    unit: Unit::Cta,
    props_root: None,
    legacy_ids: &["AboutCTASection"],
    adapter: &[
        Binding::text("title", &["cta.title"]).or("Ready to Transform Your Business?"),
        Binding::text("subtitle", &["cta.subtitle"]),
        Binding::text("description", &["cta.description"]),
        Binding::any("ctaButton", &["cta.ctaButton"]),
        Binding::text("ctaButton.text", &["buttonText", "cta.buttonText"]),
        Binding::list("features", &["cta.features"]),
    ],
    required: &["title"],
};
