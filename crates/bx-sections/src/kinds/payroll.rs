//! Payroll solution pages.

use crate::adapter::Binding;
use crate::kind::{ComponentEntry, SectionKind, Unit};

pub(crate) static HERO: ComponentEntry = ComponentEntry {
    kind: SectionKind::PayrollHero,
    path: "solution/payroll/PayrollHero",
    unit: Unit::Hero,
    props_root: None,
    legacy_ids: &["PayrollHeroSection"],
    adapter: &[
        Binding::text("title", &["hero.title"]).or("Payroll Management"),
        Binding::text("subtitle", &["hero.subtitle"]),
        Binding::text("description", &["hero.description"]),
        Binding::text("backgroundImage", &["bgImage", "hero.backgroundImage"]),
        Binding::any("ctaButton", &["hero.ctaButton"]),
    ],
    required: &["title"],
};

pub(crate) static HOW_IT_WORKS: ComponentEntry = ComponentEntry {
    kind: SectionKind::PayrollHowItWorks,
    path: "solution/payroll/PayrollHowItWorks",
    unit: Unit::Steps,
    props_root: None,
    legacy_ids: &["PayrollHowItWorksSection"],
    adapter: &[
        Binding::text("title", &["howItWorks.title"]).or("How It Works"),
        Binding::text("description", &["howItWorks.description", "subtitle"]),
        Binding::list("steps", &["howItWorks.steps", "coreWorkflow.steps"]),
    ],
    required: &["steps"],
};

// Matches the editor's `{title, subtitle, workflow}` shape as well as the
// nested `workflow: {steps}` one.
pub(crate) static WORKFLOW: ComponentEntry = ComponentEntry {
    kind: SectionKind::PayrollWorkflow,
    path: "solution/payroll/PayrollWorkflow",
    unit: Unit::Steps,
    props_root: Some("workflowData"),
    legacy_ids: &["PayrollWorkflowSection"],
    adapter: &[
        Binding::text("workflowData.title", &["title", "workflow.title"]),
        Binding::text(
            "workflowData.description",
            &["subtitle", "description", "workflow.subtitle", "workflow.description"],
        ),
        Binding::list("workflowData.steps", &["workflow", "steps", "workflow.steps"]),
    ],
    required: &["workflowData.steps"],
};

pub(crate) static STEPPER: ComponentEntry = ComponentEntry {
    kind: SectionKind::PayrollStepper,
    path: "solution/payroll/PayrollStepper",
    unit: Unit::Steps,
    props_root: None,
    legacy_ids: &["PayrollStepperSection"],
    adapter: &[
        Binding::text("title", &["coreWorkflow.title", "stepper.title"]),
        Binding::text("description", &["subtitle", "coreWorkflow.subtitle"]),
        Binding::list(
            "steps",
            &["coreWorkflow.steps", "stepper", "stepper.steps"],
        ),
    ],
    required: &["steps"],
};

pub(crate) static PAIN_POINTS: ComponentEntry = ComponentEntry {
    kind: SectionKind::PayrollPainPoints,
    path: "solution/payroll/PayrollPainPoints",
    unit: Unit::CardGrid,
    props_root: Some("painPoints"),
    legacy_ids: &["PayrollPainPointsSection"],
    adapter: &[
        Binding::text("painPoints.title", &["title"]).or("Common Payroll Pain Points"),
        Binding::text(
            "painPoints.description",
            &["painPoints.subtitle", "subtitle", "description"],
        ),
        Binding::list("painPoints.items", &["painPoints", "items"]),
    ],
    required: &["painPoints.items"],
};

pub(crate) static FAQ: ComponentEntry = ComponentEntry {
    kind: SectionKind::PayrollFaq,
    path: "solution/payroll/PayrollFAQ",
    unit: Unit::Faq,
    props_root: Some("faqData"),
    legacy_ids: &["PayrollFAQSection"],
    adapter: &[
        Binding::text("faqData.title", &["title", "faq.title"]).or("Frequently Asked Questions"),
        Binding::text("faqData.subtitle", &["subtitle", "faq.subtitle"]),
        Binding::list("faqData.items", &["faqs", "items", "faq.items", "faq.faqs"]),
    ],
    required: &["faqData.items"],
};

pub(crate) static CTA: ComponentEntry = ComponentEntry {
    kind: SectionKind::PayrollCta,
    path: "solution/payroll/PayrollCTA",
    unit: Unit::Cta,
    props_root: None,
    legacy_ids: &["PayrollCTASection"],
    adapter: &[
        Binding::text("title", &["cta.title"]).or("Ready to Get Started?"),
        Binding::text("subtitle", &["cta.subtitle", "cta.description"]),
        Binding::any("ctaButton", &["cta.ctaButton"]),
        Binding::text("ctaButton.text", &["buttonText", "cta.buttonText"]),
        Binding::text("ctaButton.link", &["buttonLink", "cta.buttonLink"]),
    ],
    required: &["title"],
};
