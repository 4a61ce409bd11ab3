//! Industry pages: manufacturing and retail.
//!
//! Industry units accept their props either flat or wrapped in `data`.

use crate::adapter::Binding;
use crate::kind::{ComponentEntry, SectionKind, Unit};

pub(crate) static MANUFACTURING_HERO: ComponentEntry = ComponentEntry {
    kind: SectionKind::ManufacturingHero,
    path: "industries/Manufacturing/HeroSection",
    unit: Unit::Hero,
    props_root: None,
    legacy_ids: &["ManufacturingHeroSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Manufacturing Solutions"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::text("description", &["data.description"]),
        Binding::text("backgroundImage", &["data.backgroundImage", "bgImage"]),
        Binding::text("backgroundVideo", &["data.backgroundVideo", "bgVideo"]),
        Binding::any("ctaButton", &["data.ctaButton"]),
    ],
    required: &["title"],
};

pub(crate) static MANUFACTURING_STATS: ComponentEntry = ComponentEntry {
    kind: SectionKind::ManufacturingStats,
    path: "industries/Manufacturing/IndustryStats",
    unit: Unit::Stats,
    props_root: None,
    legacy_ids: &["ManufacturingIndustryStats", "ManufacturingIndustryStatsSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Manufacturing by the Numbers"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::list("stats", &["items", "data", "data.stats"]),
    ],
    required: &["stats"],
};

pub(crate) static MANUFACTURING_CHALLENGES: ComponentEntry = ComponentEntry {
    kind: SectionKind::ManufacturingChallenges,
    path: "industries/Manufacturing/ChallengesSection",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["ManufacturingChallengesSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Manufacturing Challenges"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::list("items", &["challenges", "data.challenges", "data.items"]),
    ],
    required: &["items"],
};

pub(crate) static MANUFACTURING_SOLUTIONS: ComponentEntry = ComponentEntry {
    kind: SectionKind::ManufacturingSolutions,
    path: "industries/Manufacturing/SolutionsSection",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["ManufacturingSolutionsSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Our Solutions"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::list("items", &["solutions", "data.solutions", "data.items"]),
    ],
    required: &["items"],
};

pub(crate) static MANUFACTURING_CASE_STUDIES: ComponentEntry = ComponentEntry {
    kind: SectionKind::ManufacturingCaseStudies,
    path: "industries/Manufacturing/CaseStudies",
    unit: Unit::CaseStudies,
    props_root: None,
    legacy_ids: &["ManufacturingCaseStudies", "ManufacturingCaseStudiesSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Success Stories"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::list("items", &["caseStudies", "cases", "data.caseStudies", "data.items"]),
    ],
    required: &["items"],
};

pub(crate) static MANUFACTURING_PROCESS: ComponentEntry = ComponentEntry {
    kind: SectionKind::ManufacturingProcess,
    path: "industries/Manufacturing/ImplementationProcess",
    unit: Unit::Steps,
    props_root: None,
    legacy_ids: &[
        "ManufacturingImplementationProcess",
        "ManufacturingImplementationProcessSection",
    ],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Implementation Process"),
        Binding::text("description", &["subtitle", "data.subtitle", "data.description"]),
        Binding::list("steps", &["processSteps", "items", "data.steps"]),
    ],
    required: &["steps"],
};

pub(crate) static MANUFACTURING_CTA: ComponentEntry = ComponentEntry {
    kind: SectionKind::ManufacturingCta,
    path: "industries/Manufacturing/CTASection",
    unit: Unit::Cta,
    props_root: None,
    legacy_ids: &["ManufacturingCTASection"],
    adapter: &[
        Binding::text("title", &["data.title", "cta.title"]).or("Ready to Modernize Your Operations?"),
        Binding::text("subtitle", &["data.subtitle", "cta.subtitle"]),
        Binding::text("description", &["data.description", "cta.description"]),
        Binding::any("ctaButton", &["data.ctaButton", "cta.ctaButton"]),
        Binding::text("ctaButton.text", &["buttonText", "cta.buttonText"]),
        Binding::list("features", &["data.features"]),
    ],
    required: &["title"],
};

pub(crate) static RETAIL_HERO: ComponentEntry = ComponentEntry {
    kind: SectionKind::RetailHero,
    path: "industries/retail/HeroSection",
    unit: Unit::Hero,
    props_root: None,
    legacy_ids: &["RetailHeroSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Retail Solutions"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::text("description", &["data.description"]),
        Binding::text("backgroundImage", &["data.backgroundImage", "bgImage"]),
        Binding::text("backgroundVideo", &["data.backgroundVideo", "bgVideo"]),
        Binding::any("ctaButton", &["data.ctaButton"]),
    ],
    required: &["title"],
};

pub(crate) static RETAIL_STATS: ComponentEntry = ComponentEntry {
    kind: SectionKind::RetailStats,
    path: "industries/retail/IndustryStats",
    unit: Unit::Stats,
    props_root: None,
    legacy_ids: &["RetailIndustryStats", "RetailIndustryStatsSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Retail by the Numbers"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::list("stats", &["items", "data", "data.stats"]),
    ],
    required: &["stats"],
};

pub(crate) static RETAIL_CHALLENGES: ComponentEntry = ComponentEntry {
    kind: SectionKind::RetailChallenges,
    path: "industries/retail/ChallengesSection",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["RetailChallengesSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Retail Challenges"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::list("items", &["challenges", "data.challenges", "data.items"]),
    ],
    required: &["items"],
};

pub(crate) static RETAIL_SOLUTIONS: ComponentEntry = ComponentEntry {
    kind: SectionKind::RetailSolutions,
    path: "industries/retail/SolutionsSection",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["RetailSolutionsSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Our Retail Solutions"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::list("items", &["solutions", "data.solutions", "data.items"]),
    ],
    required: &["items"],
};

pub(crate) static RETAIL_FEATURES: ComponentEntry = ComponentEntry {
    kind: SectionKind::RetailFeatures,
    path: "industries/retail/FeaturesSection",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["RetailFeaturesSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Key Features"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::list("items", &["features", "data.features", "data.items"]),
    ],
    required: &["items"],
};

// Both legacy case-study ids share one path.
pub(crate) static RETAIL_CASE_STUDIES: ComponentEntry = ComponentEntry {
    kind: SectionKind::RetailCaseStudies,
    path: "industries/retail/CaseStudies",
    unit: Unit::CaseStudies,
    props_root: None,
    legacy_ids: &["RetailCaseStudies", "RetailCaseStudiesSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Success Stories"),
        Binding::text("subtitle", &["data.subtitle"]),
        Binding::list("items", &["caseStudies", "cases", "data.caseStudies", "data.items"]),
    ],
    required: &["items"],
};

pub(crate) static RETAIL_IMPLEMENTATION: ComponentEntry = ComponentEntry {
    kind: SectionKind::RetailImplementation,
    path: "industries/retail/ImplementationSection",
    unit: Unit::Steps,
    props_root: None,
    legacy_ids: &["RetailImplementationSection"],
    adapter: &[
        Binding::text("title", &["data.title"]).or("Implementation Roadmap"),
        Binding::text("description", &["subtitle", "data.subtitle", "data.description"]),
        Binding::list("steps", &["implementationSteps", "items", "data.steps"]),
    ],
    required: &["steps"],
};

pub(crate) static RETAIL_CTA: ComponentEntry = ComponentEntry {
    kind: SectionKind::RetailCta,
    path: "industries/retail/CTASection",
    unit: Unit::Cta,
    props_root: None,
    legacy_ids: &["RetailCTASection"],
    adapter: &[
        Binding::text("title", &["data.title", "cta.title"]).or("Ready to Transform Your Retail Business?"),
        Binding::text("subtitle", &["data.subtitle", "cta.subtitle"]),
        Binding::text("description", &["data.description", "cta.description"]),
        Binding::any("ctaButton", &["data.ctaButton", "cta.ctaButton"]),
        Binding::text("ctaButton.text", &["buttonText", "cta.buttonText"]),
        Binding::list("features", &["data.features"]),
    ],
    required: &["title"],
};
