//! Site facade: fetch, load and render pages.

use bx_renderer::{Document, render_error, render_loading, render_not_found};
use bx_sections::ComponentLoader;

use crate::pipeline::load_page;
use crate::source::PageSource;
use crate::state::PageState;

/// Outcome class of a rendered page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStatus {
    /// Page loaded, or still loading.
    Ok,
    /// The backend has no such page.
    NotFound,
    /// Fetching the page failed.
    Error,
}

/// A page rendered to HTML.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// Outcome class, for mapping to a transport status.
    pub status: PageStatus,
    /// Document title.
    pub title: String,
    /// Body HTML.
    pub body: String,
}

impl RenderedPage {
    /// Wrap the body into a full HTML document.
    #[must_use]
    pub fn document(&self) -> Document {
        Document::new(&self.title, &self.body)
    }
}

/// Pages of one site, backed by a page source and a component loader.
pub struct Site {
    source: Box<dyn PageSource>,
    loader: Box<dyn ComponentLoader>,
    title: String,
}

impl Site {
    /// Create a site.
    ///
    /// `title` is the site name used in every document title.
    pub fn new(
        source: impl PageSource + 'static,
        loader: impl ComponentLoader + 'static,
        title: impl Into<String>,
    ) -> Self {
        Self {
            source: Box::new(source),
            loader: Box::new(loader),
            title: title.into(),
        }
    }

    /// Site name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Run the load pipeline for `slug`.
    #[must_use]
    pub fn load(&self, slug: &str) -> PageState {
        load_page(self.source.as_ref(), self.loader.as_ref(), slug)
    }

    /// Load and render `slug`.
    #[must_use]
    pub fn render(&self, slug: &str) -> RenderedPage {
        self.present(slug, &self.load(slug))
    }

    /// Render an already loaded state of `slug`.
    #[must_use]
    pub fn present(&self, slug: &str, state: &PageState) -> RenderedPage {
        match state {
            PageState::Loading => RenderedPage {
                status: PageStatus::Ok,
                title: self.title.clone(),
                body: render_loading(),
            },
            PageState::Ready(page) => RenderedPage {
                status: PageStatus::Ok,
                title: page
                    .title
                    .as_deref()
                    .map_or_else(|| self.title.clone(), |t| format!("{t} | {}", self.title)),
                body: page.render_body(),
            },
            PageState::NotFound => RenderedPage {
                status: PageStatus::NotFound,
                title: format!("Page Not Found | {}", self.title),
                body: render_not_found(slug),
            },
            PageState::Error(message) => RenderedPage {
                status: PageStatus::Error,
                title: format!("Error | {}", self.title),
                body: render_error(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bx_renderer::NOT_FOUND_ANNOTATION;
    use bx_sections::StaticLoader;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::mock::MockPageSource;

    fn site(source: MockPageSource) -> Site {
        Site::new(source, StaticLoader, "Bellatrix")
    }

    #[test]
    fn test_missing_page_renders_not_found_screen() {
        let page = site(MockPageSource::new()).render("does-not-exist");

        assert_eq!(page.status, PageStatus::NotFound);
        assert!(page.body.contains("Page Not Found"));
        assert!(page.body.contains(r#"<a class="btn btn-primary" href="/">"#));
    }

    #[test]
    fn test_home_with_payroll_cta() {
        let source = MockPageSource::new().with_page(
            "home",
            json!({"data": {"sections": [{
                "uid": "s1",
                "componentId": "PayrollCTASection",
                "props": {"title": "Go", "ctaButton": {"text": "Go"}}
            }]}})
            .to_string(),
        );

        let page = site(source).render("home");

        assert_eq!(page.status, PageStatus::Ok);
        assert_eq!(page.body.matches("Go").count(), 2);
        assert!(!page.body.contains(NOT_FOUND_ANNOTATION));
    }

    #[test]
    fn test_empty_page_is_ok() {
        let source =
            MockPageSource::new().with_page("empty", json!({"data": {"sections": []}}).to_string());

        let page = site(source).render("empty");

        assert_eq!(page.status, PageStatus::Ok);
        assert!(page.body.contains("No sections found"));
    }

    #[test]
    fn test_fetch_error_renders_error_screen() {
        let source = MockPageSource::new().with_status("home", 500, "db down");

        let page = site(source).render("home");

        assert_eq!(page.status, PageStatus::Error);
        assert!(page.body.contains("Failed to fetch page"));
        assert!(page.body.contains("db down"));
    }

    #[test]
    fn test_titles() {
        let source = MockPageSource::new().with_page(
            "about",
            json!({"data": {"title": "About", "sections": []}}).to_string(),
        );
        let site = site(source);

        assert_eq!(site.render("about").title, "About | Bellatrix");
        assert_eq!(site.render("missing").title, "Page Not Found | Bellatrix");
        assert_eq!(site.present("x", &PageState::Loading).title, "Bellatrix");
    }

    #[test]
    fn test_loading_screen() {
        let page = site(MockPageSource::new()).present("home", &PageState::Loading);

        assert!(page.body.contains("Loading page"));
    }

    #[test]
    fn test_shared_source_serves_updated_page() {
        let source = std::sync::Arc::new(MockPageSource::new());
        let site = Site::new(std::sync::Arc::clone(&source), StaticLoader, "Bellatrix");
        assert_eq!(site.render("late").status, PageStatus::NotFound);

        source.set_page("late", json!({"sections": []}).to_string());

        assert_eq!(site.render("late").status, PageStatus::Ok);
        assert_eq!(source.fetches(), vec!["late", "late"]);
    }

    #[test]
    fn test_document_wraps_body() {
        let page = site(MockPageSource::new()).render("missing");

        let html = page.document().render();

        assert!(html.contains("<title>Page Not Found | Bellatrix</title>"));
        assert!(html.contains("Page Not Found"));
    }
}
