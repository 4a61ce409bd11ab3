//! Full-page screens for the non-ready page states.

use std::fmt::Write;

use crate::html::escape_html;

/// Screen shown while a page is loading.
#[must_use]
pub fn render_loading() -> String {
    concat!(
        r#"<div class="screen screen-loading">"#,
        r#"<div class="spinner" aria-hidden="true"></div>"#,
        "<p>Loading page…</p>",
        "</div>"
    )
    .to_owned()
}

/// Screen shown when the backend has no page for `slug`.
#[must_use]
pub fn render_not_found(slug: &str) -> String {
    let mut out = String::new();
    write!(
        out,
        concat!(
            r#"<div class="screen screen-not-found">"#,
            r#"<div class="status-code">404</div>"#,
            "<h1>Page Not Found</h1>",
            "<p>The page &quot;{}&quot; could not be found.</p>",
            r#"<a class="btn btn-primary" href="/">Go Home</a>"#,
            "</div>"
        ),
        escape_html(slug)
    )
    .unwrap();
    out
}

/// Screen shown when fetching or loading a page failed.
#[must_use]
pub fn render_error(message: &str) -> String {
    let mut out = String::new();
    write!(
        out,
        concat!(
            r#"<div class="screen screen-error">"#,
            "<h1>Failed to fetch page</h1>",
            r#"<p class="error-message">{}</p>"#,
            r#"<a class="btn btn-primary" href="/">Go Home</a>"#,
            "</div>"
        ),
        escape_html(message)
    )
    .unwrap();
    out
}
