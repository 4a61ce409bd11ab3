//! Page load pipeline.

use std::collections::HashSet;
use std::sync::Arc;

use bx_renderer::{ResolvedSections, render_sections};
use bx_sections::{ComponentEntry, ComponentLoader, Section, Unit, effective_path};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::source::{FetchError, PageSource};
use crate::state::PageState;

/// A fetched page whose sections have all been load-attempted.
#[derive(Debug)]
pub struct LoadedPage {
    /// Slug the page was fetched for.
    pub slug: String,
    /// Stored title, or the title of the page's SEO section.
    pub title: Option<String>,
    /// Visible sections in stored order.
    pub sections: Vec<Section>,
    /// Entries resolved for this load.
    pub resolved: ResolvedSections,
}

impl LoadedPage {
    /// Render the page body.
    #[must_use]
    pub fn render_body(&self) -> String {
        render_sections(&self.sections, &self.resolved)
    }
}

/// Fetch `slug` and load every visible section's component.
///
/// A 404 yields [`PageState::NotFound`]; any other fetch failure yields
/// [`PageState::Error`] with the error message. Component load failures
/// never fail the page.
pub fn load_page(source: &dyn PageSource, loader: &dyn ComponentLoader, slug: &str) -> PageState {
    let page = match source.fetch(slug) {
        Ok(page) => page,
        Err(FetchError::NotFound(_)) => {
            info!(slug, "Page not found");
            return PageState::NotFound;
        }
        Err(e) => {
            warn!(slug, error = %e, "Failed to fetch page");
            return PageState::Error(e.to_string());
        }
    };

    let sections: Vec<Section> = page.sections.into_iter().filter(Section::visible).collect();
    let resolved = resolve_sections(&sections, loader);
    let title = page.title.or_else(|| seo_title(&sections, &resolved));

    info!(
        slug,
        sections = sections.len(),
        resolved = resolved.len(),
        "Page loaded"
    );

    PageState::Ready(Arc::new(LoadedPage {
        slug: slug.to_owned(),
        title,
        sections,
        resolved,
    }))
}

/// Attempt a component load for every section in parallel.
///
/// Every attempt settles on its own; sections whose load fails or whose id
/// is unknown are absent from the result. When two sections share a uid the
/// first one decides the entry, even when it did not resolve.
pub fn resolve_sections(sections: &[Section], loader: &dyn ComponentLoader) -> ResolvedSections {
    let attempts: Vec<Option<&'static ComponentEntry>> = sections
        .par_iter()
        .map(|section| resolve_one(section, loader))
        .collect();

    let mut seen = HashSet::new();
    let mut resolved = ResolvedSections::new();
    for (section, attempt) in sections.iter().zip(attempts) {
        if !seen.insert(section.uid.as_str()) {
            warn!(uid = %section.uid, "Duplicate section uid, keeping the first");
            continue;
        }
        if let Some(entry) = attempt {
            resolved.insert(section.uid.clone(), entry);
        }
    }
    resolved
}

fn resolve_one(section: &Section, loader: &dyn ComponentLoader) -> Option<&'static ComponentEntry> {
    let Some(path) = effective_path(section) else {
        debug!(
            uid = %section.uid,
            component_id = %section.component_id,
            "Unknown component id, rendering fallback"
        );
        return None;
    };

    match loader.load(path) {
        Ok(entry) => {
            let validation = entry.validate(&entry.shape(&section.props));
            if !validation.is_valid() {
                debug!(
                    uid = %section.uid,
                    path,
                    missing = ?validation.missing,
                    "Section is missing required props"
                );
            }
            Some(entry)
        }
        Err(e) => {
            warn!(uid = %section.uid, path, error = %e, "Failed to load component");
            None
        }
    }
}

fn seo_title(sections: &[Section], resolved: &ResolvedSections) -> Option<String> {
    sections.iter().find_map(|section| {
        let entry = resolved.get(&section.uid)?;
        if entry.unit != Unit::Seo {
            return None;
        }
        entry
            .shape(&section.props)
            .get("title")?
            .as_str()
            .map(str::to_owned)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bx_renderer::NOT_FOUND_ANNOTATION;
    use bx_sections::{MockLoader, StaticLoader};
    use serde_json::json;

    use crate::mock::MockPageSource;

    fn page(sections: serde_json::Value) -> String {
        json!({"data": {"sections": sections}}).to_string()
    }

    fn ready(state: PageState) -> Arc<LoadedPage> {
        match state {
            PageState::Ready(page) => page,
            other => panic!("expected ready page, got {other:?}"),
        }
    }

    #[test]
    fn test_404_is_not_found() {
        let source = MockPageSource::new();

        let state = load_page(&source, &StaticLoader, "does-not-exist");

        assert!(matches!(state, PageState::NotFound));
    }

    #[test]
    fn test_other_status_is_error_with_message() {
        let source = MockPageSource::new().with_status("home", 503, "maintenance");

        let state = load_page(&source, &StaticLoader, "home");

        match state {
            PageState::Error(message) => assert_eq!(message, "HTTP error: 503 - maintenance"),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_page_is_error() {
        let source = MockPageSource::new().with_page("home", "{");

        let state = load_page(&source, &StaticLoader, "home");

        assert!(matches!(state, PageState::Error(ref m) if m.starts_with("Invalid page JSON")));
    }

    #[test]
    fn test_hidden_sections_are_not_loaded() {
        let source = MockPageSource::new().with_page(
            "home",
            page(json!([
                {"uid": "s1", "componentId": "HeroSection"},
                {"uid": "s2", "componentId": "SEO", "isVisible": false}
            ])),
        );
        let loader = MockLoader::new();

        let loaded = ready(load_page(&source, &loader, "home"));

        assert_eq!(loaded.sections.len(), 1);
        assert_eq!(loader.requested(), vec!["Hero".to_owned()]);
    }

    #[test]
    fn test_failed_load_degrades_only_that_section() {
        let source = MockPageSource::new().with_page(
            "home",
            page(json!([
                {"uid": "s1", "componentId": "PayrollFAQSection", "props": {"faqs": [{"q": "Q1", "a": "A1"}]}},
                {"uid": "s2", "componentId": "PayrollCTASection", "props": {"title": "Broken"}},
                {"uid": "s3", "componentId": "HRBenefitsSection", "props": {"benefits": ["Fast"]}}
            ])),
        );
        let loader = MockLoader::new().failing("solution/payroll/PayrollCTA");

        let loaded = ready(load_page(&source, &loader, "home"));
        let html = loaded.render_body();

        assert!(loaded.resolved.get("s2").is_none());
        assert_eq!(loaded.resolved.len(), 2);
        assert_eq!(html.matches(NOT_FOUND_ANNOTATION).count(), 1);
        assert!(html.contains("<summary>Q1</summary>"));
        assert!(html.contains("<h3>Fast</h3>"));
        assert!(html.contains("<h2>Broken</h2>"));
    }

    #[test]
    fn test_every_section_is_attempted() {
        let source = MockPageSource::new().with_page(
            "home",
            page(json!([
                {"uid": "a", "componentId": "AboutHeroSection"},
                {"uid": "b", "componentId": "Mystery"},
                {"uid": "c", "componentId": "X", "componentPath": "About/AboutCTA"},
                {"uid": "d", "componentId": "Y", "componentPath": "Nowhere/Else"}
            ])),
        );
        let loader = MockLoader::new();

        let loaded = ready(load_page(&source, &loader, "home"));

        let mut requested = loader.requested();
        requested.sort();
        assert_eq!(
            requested,
            vec!["About/AboutCTA", "About/AboutHero", "Nowhere/Else"]
        );
        assert!(loaded.resolved.get("a").is_some());
        assert!(loaded.resolved.get("b").is_none());
        assert!(loaded.resolved.get("c").is_some());
        assert!(loaded.resolved.get("d").is_none());
    }

    #[test]
    fn test_duplicate_uid_keeps_first() {
        let sections = vec![
            Section::new("s1", "PayrollFAQSection", Default::default()),
            Section::new("s1", "AboutHeroSection", Default::default()),
        ];

        let resolved = resolve_sections(&sections, &StaticLoader);

        assert_eq!(resolved.len(), 1);
        assert_eq!(
            resolved.get("s1").map(|e| e.path),
            Some("solution/payroll/PayrollFAQ")
        );
    }

    #[test]
    fn test_duplicate_uid_after_unresolved_first_stays_unresolved() {
        let sections = vec![
            Section::new("s1", "MysterySection", Default::default()),
            Section::new("s1", "PayrollFAQSection", Default::default()),
        ];

        let resolved = resolve_sections(&sections, &StaticLoader);
        let html = render_sections(&sections, &resolved);

        assert!(resolved.get("s1").is_none());
        assert_eq!(html.matches(NOT_FOUND_ANNOTATION).count(), 2);
        assert!(!html.contains("unit-faq"));
    }

    #[test]
    fn test_title_from_page_or_seo_section() {
        let source = MockPageSource::new()
            .with_page(
                "titled",
                json!({"data": {"title": "Stored", "sections": []}}).to_string(),
            )
            .with_page(
                "seo",
                page(json!([{"uid": "m", "componentId": "SEO", "props": {"metaTitle": "From SEO"}}])),
            );

        let titled = ready(load_page(&source, &StaticLoader, "titled"));
        let seo = ready(load_page(&source, &StaticLoader, "seo"));

        assert_eq!(titled.title.as_deref(), Some("Stored"));
        assert_eq!(seo.title.as_deref(), Some("From SEO"));
    }

    #[test]
    fn test_zero_sections_is_ready_not_error() {
        let source = MockPageSource::new().with_page("empty", page(json!([])));

        let loaded = ready(load_page(&source, &StaticLoader, "empty"));

        assert!(loaded.render_body().contains("No sections found"));
    }
}
