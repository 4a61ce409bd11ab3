//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
///
/// Page outcomes (not found, backend failure) are rendered as HTML screens
/// by the page handlers; this type covers failures of the server itself.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// A preview route was called with preview disabled.
    #[error("Preview is disabled")]
    PreviewDisabled,

    /// A blocking page load panicked or was cancelled.
    #[error("Page load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::PreviewDisabled => StatusCode::NOT_FOUND,
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, axum::Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_disabled_is_404() {
        let response = ServerError::PreviewDisabled.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
