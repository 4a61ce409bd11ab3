//! Section kinds and their registry entries.

use crate::adapter::{self, Binding, Validation};
use crate::kinds::{about, hr, industries, landing, payroll, services, shared};
use crate::section::Props;

/// Rendering family a kind belongs to.
///
/// Kinds in the same family share markup and differ in where their props
/// live and how raw props are reshaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Hero,
    CardGrid,
    Steps,
    Faq,
    Cta,
    Pricing,
    Stats,
    Team,
    Timeline,
    Testimonials,
    CaseStudies,
    Seo,
    Button,
}

impl Unit {
    /// Stable kebab-case name, used in CSS classes and listings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::CardGrid => "card-grid",
            Self::Steps => "steps",
            Self::Faq => "faq",
            Self::Cta => "cta",
            Self::Pricing => "pricing",
            Self::Stats => "stats",
            Self::Team => "team",
            Self::Timeline => "timeline",
            Self::Testimonials => "testimonials",
            Self::CaseStudies => "case-studies",
            Self::Seo => "seo",
            Self::Button => "button",
        }
    }
}

/// Everything the pipeline knows about one registry path.
#[derive(Debug)]
pub struct ComponentEntry {
    /// Kind this entry describes.
    pub kind: SectionKind,
    /// Registry path, e.g. `solution/payroll/PayrollWorkflow`.
    pub path: &'static str,
    /// Rendering family.
    pub unit: Unit,
    /// Dot path inside shaped props where the unit's own props live.
    /// `None` means the whole prop bag.
    pub props_root: Option<&'static str>,
    /// Legacy flat ids that resolve to this path.
    pub legacy_ids: &'static [&'static str],
    /// Reshaping rules applied before rendering.
    pub adapter: &'static [Binding],
    /// Paths that must be present after reshaping.
    pub required: &'static [&'static str],
}

impl ComponentEntry {
    /// Apply this entry's adapter to a raw prop bag.
    #[must_use]
    pub fn shape(&self, props: &Props) -> Props {
        adapter::apply(self.adapter, props)
    }

    /// Check shaped props against this entry's required paths.
    #[must_use]
    pub fn validate(&self, shaped: &Props) -> Validation {
        adapter::missing(self.required, shaped)
    }
}

/// Known section kinds, one per registry path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    // About
    AboutHero,
    AboutMission,
    AboutTeam,
    AboutValues,
    AboutJourney,
    AboutMilestones,
    AboutDifferentiators,
    AboutCta,
    // Payroll
    PayrollHero,
    PayrollHowItWorks,
    PayrollWorkflow,
    PayrollStepper,
    PayrollPainPoints,
    PayrollFaq,
    PayrollCta,
    // HR
    HrHero,
    HrModules,
    HrBenefits,
    HrUseCases,
    HrPricing,
    HrFaq,
    HrCta,
    // Landing
    LandingHero,
    LandingServices,
    LandingTestimonials,
    LandingIndustries,
    // Services
    ServiceGrid,
    ImplementationHero,
    ImplementationProcess,
    ImplementationWhyChoose,
    ImplementationPricing,
    ImplementationCta,
    TrainingHero,
    TrainingPrograms,
    TrainingWhyChoose,
    IntegrationTypes,
    IntegrationBenefits,
    PopularIntegrations,
    // Industries
    ManufacturingHero,
    ManufacturingStats,
    ManufacturingChallenges,
    ManufacturingSolutions,
    ManufacturingCaseStudies,
    ManufacturingProcess,
    ManufacturingCta,
    RetailHero,
    RetailStats,
    RetailChallenges,
    RetailSolutions,
    RetailFeatures,
    RetailCaseStudies,
    RetailImplementation,
    RetailCta,
    // Shared
    Seo,
    CtaButton,
}

impl SectionKind {
    /// Every kind, in registry listing order.
    pub const ALL: &'static [SectionKind] = &[
        Self::AboutHero,
        Self::AboutMission,
        Self::AboutTeam,
        Self::AboutValues,
        Self::AboutJourney,
        Self::AboutMilestones,
        Self::AboutDifferentiators,
        Self::AboutCta,
        Self::PayrollHero,
        Self::PayrollHowItWorks,
        Self::PayrollWorkflow,
        Self::PayrollStepper,
        Self::PayrollPainPoints,
        Self::PayrollFaq,
        Self::PayrollCta,
        Self::HrHero,
        Self::HrModules,
        Self::HrBenefits,
        Self::HrUseCases,
        Self::HrPricing,
        Self::HrFaq,
        Self::HrCta,
        Self::LandingHero,
        Self::LandingServices,
        Self::LandingTestimonials,
        Self::LandingIndustries,
        Self::ServiceGrid,
        Self::ImplementationHero,
        Self::ImplementationProcess,
        Self::ImplementationWhyChoose,
        Self::ImplementationPricing,
        Self::ImplementationCta,
        Self::TrainingHero,
        Self::TrainingPrograms,
        Self::TrainingWhyChoose,
        Self::IntegrationTypes,
        Self::IntegrationBenefits,
        Self::PopularIntegrations,
        Self::ManufacturingHero,
        Self::ManufacturingStats,
        Self::ManufacturingChallenges,
        Self::ManufacturingSolutions,
        Self::ManufacturingCaseStudies,
        Self::ManufacturingProcess,
        Self::ManufacturingCta,
        Self::RetailHero,
        Self::RetailStats,
        Self::RetailChallenges,
        Self::RetailSolutions,
        Self::RetailFeatures,
        Self::RetailCaseStudies,
        Self::RetailImplementation,
        Self::RetailCta,
        Self::Seo,
        Self::CtaButton,
    ];

    /// Registry entry for this kind.
    #[must_use]
    pub fn entry(self) -> &'static ComponentEntry {
        match self {
            Self::AboutHero => &about::HERO,
            Self::AboutMission => &about::MISSION,
            Self::AboutTeam => &about::TEAM,
            Self::AboutValues => &about::VALUES,
            Self::AboutJourney => &about::JOURNEY,
            Self::AboutMilestones => &about::MILESTONES,
            Self::AboutDifferentiators => &about::DIFFERENTIATORS,
            Self::AboutCta => &about::CTA,
            Self::PayrollHero => &payroll::HERO,
            Self::PayrollHowItWorks => &payroll::HOW_IT_WORKS,
            Self::PayrollWorkflow => &payroll::WORKFLOW,
            Self::PayrollStepper => &payroll::STEPPER,
            Self::PayrollPainPoints => &payroll::PAIN_POINTS,
            Self::PayrollFaq => &payroll::FAQ,
            Self::PayrollCta => &payroll::CTA,
            Self::HrHero => &hr::HERO,
            Self::HrModules => &hr::MODULES,
            Self::HrBenefits => &hr::BENEFITS,
            Self::HrUseCases => &hr::USE_CASES,
            Self::HrPricing => &hr::PRICING,
            Self::HrFaq => &hr::FAQ,
            Self::HrCta => &hr::CTA,
            Self::LandingHero => &landing::HERO,
            Self::LandingServices => &landing::SERVICES,
            Self::LandingTestimonials => &landing::TESTIMONIALS,
            Self::LandingIndustries => &landing::INDUSTRIES,
            Self::ServiceGrid => &services::GRID,
            Self::ImplementationHero => &services::IMPLEMENTATION_HERO,
            Self::ImplementationProcess => &services::IMPLEMENTATION_PROCESS,
            Self::ImplementationWhyChoose => &services::IMPLEMENTATION_WHY_CHOOSE,
            Self::ImplementationPricing => &services::IMPLEMENTATION_PRICING,
            Self::ImplementationCta => &services::IMPLEMENTATION_CTA,
            Self::TrainingHero => &services::TRAINING_HERO,
            Self::TrainingPrograms => &services::TRAINING_PROGRAMS,
            Self::TrainingWhyChoose => &services::TRAINING_WHY_CHOOSE,
            Self::IntegrationTypes => &services::INTEGRATION_TYPES,
            Self::IntegrationBenefits => &services::INTEGRATION_BENEFITS,
            Self::PopularIntegrations => &services::POPULAR_INTEGRATIONS,
            Self::ManufacturingHero => &industries::MANUFACTURING_HERO,
            Self::ManufacturingStats => &industries::MANUFACTURING_STATS,
            Self::ManufacturingChallenges => &industries::MANUFACTURING_CHALLENGES,
            Self::ManufacturingSolutions => &industries::MANUFACTURING_SOLUTIONS,
            Self::ManufacturingCaseStudies => &industries::MANUFACTURING_CASE_STUDIES,
            Self::ManufacturingProcess => &industries::MANUFACTURING_PROCESS,
            Self::ManufacturingCta => &industries::MANUFACTURING_CTA,
            Self::RetailHero => &industries::RETAIL_HERO,
            Self::RetailStats => &industries::RETAIL_STATS,
            Self::RetailChallenges => &industries::RETAIL_CHALLENGES,
            Self::RetailSolutions => &industries::RETAIL_SOLUTIONS,
            Self::RetailFeatures => &industries::RETAIL_FEATURES,
            Self::RetailCaseStudies => &industries::RETAIL_CASE_STUDIES,
            Self::RetailImplementation => &industries::RETAIL_IMPLEMENTATION,
            Self::RetailCta => &industries::RETAIL_CTA,
            Self::Seo => &shared::SEO,
            Self::CtaButton => &shared::CTA_BUTTON,
        }
    }

    /// Registry path.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.entry().path
    }

    /// Rendering family.
    #[must_use]
    pub fn unit(self) -> Unit {
        self.entry().unit
    }

    /// Kind registered under `path`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        crate::registry::lookup(path).map(|entry| entry.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_points_back_to_its_kind() {
        for &kind in SectionKind::ALL {
            assert_eq!(kind.entry().kind, kind, "{kind:?}");
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = SectionKind::ALL.iter().map(|k| k.path()).collect();

        assert_eq!(paths.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_from_path_round_trips() {
        for &kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_path(kind.path()), Some(kind));
        }
        assert_eq!(SectionKind::from_path("nope/Nothing"), None);
    }

    #[test]
    fn test_props_root_is_written_by_adapter() {
        // Every unit reads under its root, so the adapter must produce it.
        for &kind in SectionKind::ALL {
            let entry = kind.entry();
            if let Some(root) = entry.props_root {
                assert!(
                    entry
                        .adapter
                        .iter()
                        .any(|b| b.target() == root || b.target().starts_with(&format!("{root}."))),
                    "{kind:?} never writes under {root}"
                );
            }
        }
    }

    #[test]
    fn test_required_paths_are_adapter_targets() {
        for &kind in SectionKind::ALL {
            let entry = kind.entry();
            for required in entry.required {
                assert!(
                    entry.adapter.iter().any(|b| b.target() == *required),
                    "{kind:?} requires {required} but never binds it"
                );
            }
        }
    }

    #[test]
    fn test_unit_names_are_kebab_case() {
        assert_eq!(Unit::CardGrid.name(), "card-grid");
        assert_eq!(Unit::CaseStudies.name(), "case-studies");
        assert_eq!(SectionKind::PayrollFaq.unit(), Unit::Faq);
    }
}
