//! HR solution pages.
//!
//! Most HR units read their props from a `data` object.

use crate::adapter::Binding;
use crate::kind::{ComponentEntry, SectionKind, Unit};

pub(crate) static HERO: ComponentEntry = ComponentEntry {
    kind: SectionKind::HrHero,
    path: "solution/hr/HeroSection",
    unit: Unit::Hero,
    props_root: Some("data.hero"),
    legacy_ids: &["HRHeroSection"],
    adapter: &[
        Binding::text("data.hero.title", &["hero.title", "title"]).or("HR Management Solutions"),
        Binding::text("data.hero.subtitle", &["hero.subtitle", "subtitle"])
            .or("Streamline your HR processes"),
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

pub(crate) static MODULES: ComponentEntry = ComponentEntry {
    kind: SectionKind::HrModules,
    path: "solution/hr/ModulesSection",
    unit: Unit::CardGrid,
    props_root: Some("data"),
    legacy_ids: &["HRModulesSection"],
    adapter: &[
        Binding::text("data.title", &["modules.title", "title"]).or("HR Modules"),
        Binding::text("data.subtitle", &["modules.subtitle", "subtitle"])
            .or("Comprehensive HR solutions"),
        Binding::list("data.items", &["data.modules", "modules", "modules.items", "items"]),
    ],
    required: &["data.items"],
};

pub(crate) static BENEFITS: ComponentEntry = ComponentEntry {
    kind: SectionKind::HrBenefits,
    path: "solution/hr/BenefitsSection",
    unit: Unit::CardGrid,
    props_root: None,
    legacy_ids: &["HRBenefitsSection"],
    adapter: &[
        Binding::text("title", &["benefits.title"]).or("HR Benefits"),
        Binding::text("subtitle", &["benefits.subtitle", "description"]),
        Binding::list("items", &["benefits", "benefits.items"]),
    ],
    required: &["items"],
};

pub(crate) static USE_CASES: ComponentEntry = ComponentEntry {
    kind: SectionKind::HrUseCases,
    path: "solution/hr/UseCasesSection",
    unit: Unit::CardGrid,
    props_root: Some("data"),
    legacy_ids: &["HRUseCasesSection"],
    adapter: &[
        Binding::text("data.title", &["useCases.title", "title"]).or("Use Cases"),
        Binding::text("data.subtitle", &["useCases.subtitle", "subtitle"]),
        Binding::list("data.items", &["data.useCases", "useCases", "useCases.items", "items"]),
    ],
    required: &["data.items"],
};

pub(crate) static PRICING: ComponentEntry = ComponentEntry {
    kind: SectionKind::HrPricing,
    path: "solution/hr/PricingSection",
    unit: Unit::Pricing,
    props_root: Some("data"),
    legacy_ids: &["HRPricingSection"],
    adapter: &[
        Binding::text("data.title", &["pricing.title", "title"]).or("Pricing Plans"),
        Binding::text("data.subtitle", &["pricing.subtitle", "subtitle"]),
        Binding::list("data.plans", &["data.pricing", "pricing", "pricing.plans", "plans"]),
    ],
    required: &["data.plans"],
};

pub(crate) static FAQ: ComponentEntry = ComponentEntry {
    kind: SectionKind::HrFaq,
    path: "solution/hr/FAQSection",
    unit: Unit::Faq,
    props_root: Some("data"),
    legacy_ids: &["HRFAQSection"],
    adapter: &[
        Binding::text("data.title", &["faq.title", "title"]).or("Frequently Asked Questions"),
        Binding::text("data.subtitle", &["faq.subtitle", "subtitle"]),
        Binding::list("data.items", &["data.faq", "faq", "faq.items", "faqs", "items"]),
    ],
    required: &["data.items"],
};

pub(crate) static CTA: ComponentEntry = ComponentEntry {
    kind: SectionKind::HrCta,
    path: "solution/hr/CTASection",
    unit: Unit::Cta,
    props_root: None,
    legacy_ids: &["HRCTASection"],
    adapter: &[
        Binding::text("title", &["cta.title"]).or("Ready to Transform Your HR?"),
        Binding::text("subtitle", &["cta.subtitle"]),
        Binding::text("description", &["cta.description"]),
        Binding::any("ctaButton", &["cta.ctaButton"]),
        Binding::text("ctaButton.text", &["buttonText", "cta.buttonText"]),
    ],
    required: &["title"],
};
