//! Service pages: implementation, training and integration.

use crate::adapter::Binding;
use crate::kind::{ComponentEntry, SectionKind, Unit};

pub(crate) static GRID: ComponentEntry = ComponentEntry {
    kind: SectionKind::ServiceGrid,
    path: "Services/ServiceGrid",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["ServiceGrid"],
    adapter: &[
        Binding::text("title", &[]).or("Our Services"),
        Binding::text("subtitle", &["description"]),
        Binding::list("items", &["services"]),
    ],
    required: &["items"],
};

pub(crate) static IMPLEMENTATION_HERO: ComponentEntry = ComponentEntry {
    kind: SectionKind::ImplementationHero,
    path: "Services/Implementation/HeroSection",
    unit: Unit::Hero,
    props_root: Some("data.hero"),
    legacy_ids: &["ImplementationHeroSection"],
    adapter: &[
        Binding::text("data.hero.title", &["hero.title", "title"]).or("Implementation Services"),
        Binding::text("data.hero.subtitle", &["hero.subtitle", "subtitle"])
            .or("Professional NetSuite implementation"),
        Binding::text("data.hero.description", &["hero.description", "description"]),
        Binding::text(
            "data.hero.backgroundVideo",
            &["hero.bgVideo", "bgVideo", "backgroundVideo"],
        ),
        Binding::text("data.hero.backgroundImage", &["hero.backgroundImage", "backgroundImage"]),
        Binding::any("data.hero.ctaButton", &["hero.ctaButton", "ctaButton"]),
    ],
    required: &["data.hero.title"],
};

pub(crate) static IMPLEMENTATION_PROCESS: ComponentEntry = ComponentEntry {
    kind: SectionKind::ImplementationProcess,
    path: "Services/Implementation/ProcessSection",
    unit: Unit::Steps,
    props_root: Some("data"),
    legacy_ids: &["ImplementationProcessSection"],
    adapter: &[
        Binding::text("data.title", &["process.title", "title"]).or("Implementation Process"),
        Binding::text(
            "data.description",
            &["process.subtitle", "process.description", "subtitle", "description"],
        ),
        Binding::list("data.steps", &["process", "process.steps", "steps"]),
    ],
    required: &["data.steps"],
};

pub(crate) static IMPLEMENTATION_WHY_CHOOSE: ComponentEntry = ComponentEntry {
    kind: SectionKind::ImplementationWhyChoose,
    path: "Services/Implementation/WhyChooseSection",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["ImplementationWhyChooseSection"],
    adapter: &[
        Binding::text("title", &["whyChoose.title"]).or("Why Choose Us"),
        Binding::text("subtitle", &["whyChoose.subtitle", "description"]),
        Binding::list("items", &["features", "reasons", "whyChoose.features"]),
    ],
    required: &["items"],
};

pub(crate) static IMPLEMENTATION_PRICING: ComponentEntry = ComponentEntry {
    kind: SectionKind::ImplementationPricing,
    path: "Services/Implementation/PricingSection",
    unit: Unit::Pricing,
    props_root: None,
    legacy_ids: &["ImplementationPricingSection"],
    adapter: &[
        Binding::text("title", &["pricing.title"]).or("Implementation Pricing"),
        Binding::text("subtitle", &["pricing.subtitle"]),
        Binding::list("plans", &["pricing", "pricing.plans"]),
    ],
    required: &["plans"],
};

pub(crate) static IMPLEMENTATION_CTA: ComponentEntry = ComponentEntry {
    kind: SectionKind::ImplementationCta,
    path: "Services/Implementation/CtaSection",
    unit: Unit::Cta,
    props_root: None,
    legacy_ids: &["ImplementationCTASection", "ImplementationCtaSection"],
    adapter: &[
        Binding::text("title", &["cta.title"]).or("Ready to Start Your Implementation?"),
        Binding::text("subtitle", &["cta.subtitle"]),
        Binding::text("description", &["cta.description"]),
        Binding::any("ctaButton", &["cta.ctaButton"]),
        Binding::text("ctaButton.text", &["buttonText", "cta.buttonText"]),
        Binding::list("features", &["cta.features"]),
    ],
    required: &["title"],
};

pub(crate) static TRAINING_HERO: ComponentEntry = ComponentEntry {
    kind: SectionKind::TrainingHero,
    path: "Services/training/HeroSection",
    unit: Unit::Hero,
    props_root: Some("heroContent"),
    legacy_ids: &["TrainingHeroSection"],
    adapter: &[
        Binding::text("heroContent.title", &["hero.title", "title"])
            .or("Professional Training Programs"),
        Binding::text(
            "heroContent.subtitle",
            &["heroContent.description", "hero.subtitle", "subtitle", "description"],
        ),
        Binding::text(
            "heroContent.backgroundVideo",
            &["backgroundVideo", "hero.bgVideo", "bgVideo"],
        )
        .or("/Videos/trainingHeroSection.mp4"),
        Binding::any("heroContent.ctaButton", &["ctaButton", "hero.ctaButton"]),
    ],
    required: &["heroContent.title"],
};

pub(crate) static TRAINING_PROGRAMS: ComponentEntry = ComponentEntry {
    kind: SectionKind::TrainingPrograms,
    path: "Services/training/TrainingPrograms",
    unit: Unit::CardGrid,
    props_root: Some("programsSection"),
    legacy_ids: &["TrainingProgramsSection"],
    adapter: &[
        Binding::text("programsSection.title", &["trainingPrograms.title", "title"])
            .or("Our Training Programs"),
        Binding::text(
            "programsSection.description",
            &["trainingPrograms.description", "subtitle", "description"],
        ),
        Binding::list(
            "programsSection.items",
            &["trainingPrograms", "trainingPrograms.programs", "programs"],
        ),
    ],
    required: &["programsSection.items"],
};

pub(crate) static TRAINING_WHY_CHOOSE: ComponentEntry = ComponentEntry {
    kind: SectionKind::TrainingWhyChoose,
    path: "Services/training/WhyChooseSection",
    unit: Unit::CardGrid,
    props_root: Some("whyChooseSection"),
    legacy_ids: &["TrainingWhyChooseSection"],
    adapter: &[
        Binding::text("whyChooseSection.title", &["title"]).or("Why Choose Our Training?"),
        Binding::text("whyChooseSection.subtitle", &["subtitle"])
            .or("We provide world-class training solutions"),
        Binding::list("whyChooseSection.items", &["trainingFeatures", "features", "items"]),
    ],
    required: &["whyChooseSection.items"],
};

pub(crate) static INTEGRATION_TYPES: ComponentEntry = ComponentEntry {
    kind: SectionKind::IntegrationTypes,
    path: "Services/Integration/IntegrationTypes",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["IntegrationTypesSection"],
    adapter: &[
        Binding::text("title", &["integrationTypes.title"]).or("Integration Solutions"),
        Binding::text("subtitle", &["integrationTypes.subtitle", "description"]),
        Binding::list("items", &["integrationTypes.items", "types"]),
    ],
    required: &["items"],
};

pub(crate) static INTEGRATION_BENEFITS: ComponentEntry = ComponentEntry {
    kind: SectionKind::IntegrationBenefits,
    path: "Services/Integration/BenefitsSection",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["IntegrationBenefitsSection"],
    adapter: &[
        Binding::text("title", &["benefits.title"]).or("Integration Benefits"),
        Binding::text("subtitle", &["benefits.subtitle", "description"]),
        Binding::list("items", &["benefits", "benefits.items"]),
    ],
    required: &["items"],
};

pub(crate) static POPULAR_INTEGRATIONS: ComponentEntry = ComponentEntry {
    kind: SectionKind::PopularIntegrations,
    path: "Services/Integration/PopularIntegrations",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["PopularIntegrationsSection"],
    adapter: &[
        Binding::text("title", &["popularIntegrations.title"]).or("Popular Integrations"),
        Binding::text("subtitle", &["popularIntegrations.subtitle", "description"]),
        Binding::list("items", &["platforms", "popularIntegrations.platforms"]),
    ],
    required: &["items"],
};
