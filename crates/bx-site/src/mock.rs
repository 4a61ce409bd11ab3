//! Mock page source for testing.
//!
//! Provides [`MockPageSource`] for tests that should not talk to a backend.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::page::PageData;
use crate::source::{FetchError, PageSource};

enum Response {
    Page(String),
    Status(u16, String),
}

/// In-memory page source.
///
/// Slugs without a configured response are not found.
///
/// # Example
///
/// ```ignore
/// use bx_site::{MockPageSource, PageSource};
///
/// let source = MockPageSource::new()
///     .with_page("home", r#"{"data":{"sections":[]}}"#)
///     .with_status("broken", 500, "db down");
///
/// assert!(source.fetch("home").is_ok());
/// assert!(source.fetch("missing").is_err());
/// ```
#[derive(Default)]
pub struct MockPageSource {
    responses: RwLock<HashMap<String, Response>>,
    fetches: RwLock<Vec<String>>,
}

impl MockPageSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `slug`, parsed like a backend response.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, slug: impl Into<String>, body: impl Into<String>) -> Self {
        self.set_page(slug, body);
        self
    }

    /// Answer `slug` with a non-success status.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_status(self, slug: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(slug.into(), Response::Status(status, body.into()));
        self
    }

    /// Replace the page served for `slug`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_page(&self, slug: impl Into<String>, body: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(slug.into(), Response::Page(body.into()));
    }

    /// Slugs fetched so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn fetches(&self) -> Vec<String> {
        self.fetches.read().unwrap().clone()
    }
}

impl PageSource for MockPageSource {
    fn fetch(&self, slug: &str) -> Result<PageData, FetchError> {
        self.fetches.write().unwrap().push(slug.to_owned());
        match self.responses.read().unwrap().get(slug) {
            Some(Response::Page(body)) => Ok(PageData::from_json(body)?),
            Some(Response::Status(404, _)) | None => Err(FetchError::NotFound(slug.to_owned())),
            Some(Response::Status(status, body)) => Err(FetchError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
