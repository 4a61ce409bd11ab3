//! Preview endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::HeaderName;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use serde::Serialize;

use crate::error::ServerError;
use crate::preview::StateEvent;
use crate::state::AppState;

/// Client script that reloads the preview on every reload event, and when
/// the state pushed on connect differs from the one the page was rendered at.
const PREVIEW_SCRIPT: &str = r#"(() => {
  const shown = new URL(document.currentScript.src).searchParams.get("v");
  const scheme = location.protocol === "https:" ? "wss:" : "ws:";
  const connect = () => {
    const socket = new WebSocket(`${scheme}//${location.host}/ws/preview`);
    socket.onmessage = (event) => {
      const msg = JSON.parse(event.data);
      if (msg.type === "reload") location.reload();
      if (msg.type === "state" && `${msg.generation}-${msg.state}` !== shown) location.reload();
    };
    socket.onclose = () => setTimeout(connect, 1000);
  };
  connect();
})();
"#;

/// Header carrying the preview state on `GET /preview`.
const PREVIEW_STATE: &str = "x-preview-state";

/// Response for preview mutations.
#[derive(Serialize)]
pub(crate) struct PreviewResponse {
    /// Slug the request was about.
    slug: String,
    /// Whether the request changed (or will change) the preview.
    applied: bool,
}

/// Handle GET /preview.
pub(crate) async fn get_preview(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let preview = state.preview()?;
    let snapshot = preview.snapshot();
    let token = StateEvent::from_snapshot(&snapshot).token();
    let slug = snapshot.slug.unwrap_or_default();

    let page = preview.site().present(&slug, &snapshot.state);
    let html = page
        .document()
        .script(format!("/preview.js?v={token}"))
        .render();

    Ok((
        [
            (header::CACHE_CONTROL, "no-store"),
            (
                HeaderName::from_static(PREVIEW_STATE),
                snapshot.state.label(),
            ),
        ],
        Html(html),
    ))
}

/// Handle GET /preview.js.
pub(crate) async fn get_preview_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        PREVIEW_SCRIPT,
    )
}

/// Handle POST /api/preview/{slug}: show `slug` in the preview.
pub(crate) async fn navigate(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PreviewResponse>, ServerError> {
    let applied = state.preview()?.navigate(&slug).await?;
    Ok(Json(PreviewResponse { slug, applied }))
}

/// Handle POST /api/pages/{slug}/updated: the stored page changed.
pub(crate) async fn page_updated(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let applied = state.preview()?.page_updated(&slug);
    Ok((StatusCode::ACCEPTED, Json(PreviewResponse { slug, applied })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_script_listens_for_reload() {
        assert!(PREVIEW_SCRIPT.contains("/ws/preview"));
        assert!(PREVIEW_SCRIPT.contains("\"reload\""));
    }

    #[test]
    fn test_preview_script_compares_state_token() {
        assert!(PREVIEW_SCRIPT.contains("searchParams.get(\"v\")"));
        assert!(PREVIEW_SCRIPT.contains("${msg.generation}-${msg.state}"));
    }
}
