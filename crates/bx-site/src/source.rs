//! Page sources.

use std::sync::Arc;
use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use ureq::Agent;

use crate::page::PageData;

/// Characters escaped when a slug is placed in a URL path segment.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Error fetching a page document.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The backend has no page for the slug.
    #[error("Page not found: {0}")]
    NotFound(String),

    /// The backend answered with a non-success status other than 404.
    #[error("HTTP error: {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    /// Response body is not a valid page document.
    #[error("Invalid page JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of page documents.
pub trait PageSource: Send + Sync {
    /// Fetch the page stored under `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] if no such page exists, and another
    /// variant for any other failure.
    fn fetch(&self, slug: &str) -> Result<PageData, FetchError>;
}

impl<T: PageSource + ?Sized> PageSource for Arc<T> {
    fn fetch(&self, slug: &str) -> Result<PageData, FetchError> {
        (**self).fetch(slug)
    }
}

/// Page source backed by the CMS REST API.
///
/// Fetches `GET {base_url}/api/pages/{slug}`.
pub struct HttpPageSource {
    agent: Agent,
    base_url: String,
}

impl HttpPageSource {
    /// Create a source for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// URL of the page document for `slug`.
    fn page_url(&self, slug: &str) -> String {
        format!(
            "{}/api/pages/{}",
            self.base_url,
            utf8_percent_encode(slug, SEGMENT_ENCODE_SET)
        )
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, slug: &str) -> Result<PageData, FetchError> {
        let url = self.page_url(slug);
        tracing::debug!(slug, url = %url, "Fetching page");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status == 404 {
            return Err(FetchError::NotFound(slug.to_owned()));
        }
        if !(200..300).contains(&status) {
            let body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(FetchError::Status { status, body });
        }

        let body = body_reader.read_to_string()?;
        Ok(PageData::from_json(&body)?)
    }
}
