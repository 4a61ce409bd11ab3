//! Units shared across pages.

use crate::adapter::Binding;
use crate::kind::{ComponentEntry, SectionKind, Unit};

pub(crate) static SEO: ComponentEntry = ComponentEntry {
    kind: SectionKind::Seo,
    path: "SEO",
    unit: Unit::Seo,
    props_root: None,
    legacy_ids: &["SEO"],
    adapter: &[
        Binding::text("title", &["metaTitle"]),
        Binding::text("description", &["metaDescription"]),
        Binding::any("keywords", &["metaKeywords"]),
        Binding::text("image", &["ogImage"]),
    ],
    required: &["title"],
};

pub(crate) static CTA_BUTTON: ComponentEntry = ComponentEntry {
    kind: SectionKind::CtaButton,
    path: "CTAButton",
    unit: Unit::Button,
    props_root: None,
    legacy_ids: &["CTAButton"],
    adapter: &[
        Binding::text("text", &["label", "ctaText", "buttonText"]),
        Binding::text("link", &["href", "url"]),
        Binding::text("variant", &[]).or("primary"),
    ],
    required: &["text"],
};
