//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use bx_site::Site;

use crate::preview::PreviewManager;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site that fetches and renders pages.
    pub(crate) site: Arc<Site>,
    /// Slug rendered at `/`.
    pub(crate) home_slug: String,
    /// Preview manager (if enabled).
    pub(crate) preview: Option<PreviewManager>,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}

impl AppState {
    /// Preview manager, or an error if preview is disabled.
    pub(crate) fn preview(&self) -> Result<&PreviewManager, crate::error::ServerError> {
        self.preview
            .as_ref()
            .ok_or(crate::error::ServerError::PreviewDisabled)
    }
}
