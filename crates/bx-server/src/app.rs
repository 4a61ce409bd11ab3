//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::preview;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/api/components", get(handlers::components::get_components))
        .route("/", get(handlers::pages::get_home))
        .route("/{slug}", get(handlers::pages::get_page));

    if state.preview.is_some() {
        router = router
            .route("/preview", get(handlers::preview::get_preview))
            .route("/preview.js", get(handlers::preview::get_preview_script))
            .route("/api/preview/{slug}", post(handlers::preview::navigate))
            .route(
                "/api/pages/{slug}/updated",
                post(handlers::preview::page_updated),
            )
            .route("/ws/preview", get(preview::ws_handler));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode, header};
    use bx_sections::StaticLoader;
    use bx_site::{MockPageSource, Site};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::sync::broadcast;
    use tower::ServiceExt;

    use crate::preview::PreviewManager;

    fn home_page() -> String {
        json!({"data": {"sections": [{
            "uid": "s1",
            "componentId": "PayrollCTASection",
            "props": {"title": "Go", "ctaButton": {"text": "Go"}}
        }]}})
        .to_string()
    }

    fn app(source: MockPageSource, preview: bool) -> Router {
        let site = Arc::new(Site::new(source, StaticLoader, "Bellatrix"));
        let preview = preview.then(|| {
            let (tx, _rx) = broadcast::channel(16);
            PreviewManager::new(Arc::clone(&site), tx, Duration::from_millis(10))
        });
        create_router(Arc::new(AppState {
            site,
            home_slug: "home".to_owned(),
            preview,
            version: "test".to_owned(),
        }))
    }

    async fn send(app: Router, method: &str, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_renders_home_slug() {
        let app = app(MockPageSource::new().with_page("home", home_page()), false);

        let response = send(app, "GET", "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        let body = text(response).await;
        assert_eq!(body.matches("Go").count(), 2);
        assert!(!body.contains("(Component not found)"));
    }

    #[tokio::test]
    async fn test_missing_page_is_404_with_screen() {
        let app = app(MockPageSource::new(), false);

        let response = send(app, "GET", "/does-not-exist").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = text(response).await;
        assert!(body.contains("Page Not Found"));
        assert!(body.contains(r#"href="/""#));
    }

    #[tokio::test]
    async fn test_backend_failure_is_502_with_screen() {
        let app = app(
            MockPageSource::new().with_status("pricing", 500, "db down"),
            false,
        );

        let response = send(app, "GET", "/pricing").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = text(response).await;
        assert!(body.contains("Failed to fetch page"));
        assert!(body.contains("db down"));
    }

    #[tokio::test]
    async fn test_matching_etag_is_304() {
        let app = app(MockPageSource::new().with_page("home", home_page()), false);

        let first = send(app.clone(), "GET", "/home").await;
        let etag = first.headers()[header::ETAG].clone();

        let request = Request::builder()
            .uri("/home")
            .header(header::IF_NONE_MATCH, etag)
            .body(Body::empty())
            .unwrap();
        let second = app.oneshot(request).await.unwrap();

        assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_security_headers() {
        let app = app(MockPageSource::new(), false);

        let response = send(app, "GET", "/api/components").await;

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
        assert!(headers.contains_key("content-security-policy"));
    }

    #[tokio::test]
    async fn test_components_endpoint() {
        let app = app(MockPageSource::new(), false);

        let response = send(app, "GET", "/api/components").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&text(response).await).unwrap();
        assert_eq!(
            json["components"].as_array().unwrap().len(),
            bx_sections::entries().count()
        );
    }

    #[tokio::test]
    async fn test_preview_routes_absent_when_disabled() {
        let app = app(MockPageSource::new(), false);

        let response = send(app, "POST", "/api/preview/home").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preview_navigate_then_show() {
        let app = app(MockPageSource::new().with_page("home", home_page()), true);

        let response = send(app.clone(), "POST", "/api/preview/home").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&text(response).await).unwrap();
        assert_eq!(json, json!({"slug": "home", "applied": true}));

        let response = send(app, "GET", "/preview").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-preview-state"], "ready");
        let body = text(response).await;
        assert!(body.contains("<h2>Go</h2>"));
        assert!(body.contains(r#"<script src="/preview.js?v=1-ready"></script>"#));
    }

    #[tokio::test]
    async fn test_preview_before_navigation_is_loading() {
        let app = app(MockPageSource::new(), true);

        let response = send(app, "GET", "/preview").await;

        assert_eq!(response.headers()["x-preview-state"], "loading");
        let body = text(response).await;
        assert!(body.contains("Loading page"));
        assert!(body.contains("/preview.js?v=0-loading"));
    }

    #[tokio::test]
    async fn test_page_updated_only_applies_to_previewed_slug() {
        let app = app(MockPageSource::new().with_page("home", home_page()), true);
        send(app.clone(), "POST", "/api/preview/home").await;

        let other = send(app.clone(), "POST", "/api/pages/about/updated").await;
        let same = send(app, "POST", "/api/pages/home/updated").await;

        assert_eq!(other.status(), StatusCode::ACCEPTED);
        let other: serde_json::Value = serde_json::from_str(&text(other).await).unwrap();
        let same: serde_json::Value = serde_json::from_str(&text(same).await).unwrap();
        assert_eq!(other["applied"], false);
        assert_eq!(same["applied"], true);
    }

    #[tokio::test]
    async fn test_preview_script_served() {
        let app = app(MockPageSource::new(), true);

        let response = send(app, "GET", "/preview.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("WebSocket"));
    }
}
