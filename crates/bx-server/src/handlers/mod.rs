//! HTTP request handlers.

pub(crate) mod components;
pub(crate) mod pages;
pub(crate) mod preview;

use axum::http::StatusCode;
use bx_site::PageStatus;

/// HTTP status for a rendered page.
///
/// A failed backend fetch is the upstream's fault, so it maps to 502.
pub(crate) fn status_code(status: PageStatus) -> StatusCode {
    match status {
        PageStatus::Ok => StatusCode::OK,
        PageStatus::NotFound => StatusCode::NOT_FOUND,
        PageStatus::Error => StatusCode::BAD_GATEWAY,
    }
}
