//! Page endpoints.
//!
//! Renders CMS pages to full HTML documents.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use md5::{Digest, Md5};

use crate::error::ServerError;
use crate::handlers::status_code;
use crate::state::AppState;

/// Handle GET / (home page).
pub(crate) async fn get_home(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let slug = state.home_slug.clone();
    render_page(state, slug, &headers).await
}

/// Handle GET /{slug}.
pub(crate) async fn get_page(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    render_page(state, slug, &headers).await
}

/// Shared implementation for page rendering.
async fn render_page(
    state: Arc<AppState>,
    slug: String,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let site = Arc::clone(&state.site);
    let page = tokio::task::spawn_blocking(move || site.render(&slug)).await?;

    let status = status_code(page.status);
    let html = page.document().render();

    if status != StatusCode::OK {
        return Ok((status, Html(html)).into_response());
    }

    let etag = compute_etag(&state.version, &html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        Html(html),
    )
        .into_response())
}

/// Compute a weak `ETag` from version and rendered document.
///
/// Uses MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("W/\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        let etag1 = compute_etag("1.0.0", "content");
        let etag2 = compute_etag("1.0.1", "content");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_includes_content() {
        let etag1 = compute_etag("1.0.0", "content1");
        let etag2 = compute_etag("1.0.0", "content2");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with("W/\""));
        assert!(etag.ends_with('"'));
        // W/ + 16 hex chars + 2 quotes
        assert_eq!(etag.len(), 20);
    }
}
