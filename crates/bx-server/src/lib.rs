//! HTTP server for the BX page engine.
//!
//! This crate serves CMS pages rendered by [`bx_site::Site`] over axum:
//! - Page routes: `/` for the home slug and `/{slug}` for any other page
//! - `/api/components`: the component registry and legacy id map
//! - Live preview (when enabled): a page view driven by editor events, with
//!   reload notifications pushed over a WebSocket
//!
//! # Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use bx_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         backend_url: "http://localhost:5000".to_owned(),
//!         preview_enabled: true,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (bx-server)
//!                        │
//!                        ├─► Page routes ──spawn_blocking──► Site::render
//!                        │                                      │
//!                        │                                      └─► CMS REST API (ureq)
//!                        │
//!                        └─► Preview routes ──► PreviewManager ──► PageView
//!                                                   │
//!                                                   └─► WebSocket reload events
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod preview;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use bx_sections::StaticLoader;
use bx_site::{HttpPageSource, Site};
use state::AppState;
use tokio::sync::broadcast;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Base URL of the CMS backend.
    pub backend_url: String,
    /// Timeout for page fetches.
    pub timeout: Duration,
    /// Slug rendered at `/`.
    pub home_slug: String,
    /// Site name used in document titles.
    pub site_title: String,
    /// Enable live preview routes.
    pub preview_enabled: bool,
    /// Delay before a page update refreshes the preview.
    pub debounce: Duration,
    /// Application version (for `ETag` invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            backend_url: "http://localhost:5000".to_owned(),
            timeout: Duration::from_secs(30),
            home_slug: "home".to_owned(),
            site_title: "Bellatrix".to_owned(),
            preview_enabled: false,
            debounce: Duration::from_millis(250),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source = HttpPageSource::new(&config.backend_url, config.timeout);
    let site = Arc::new(Site::new(source, StaticLoader, config.site_title.clone()));

    let preview = if config.preview_enabled {
        let (tx, _rx) = broadcast::channel::<preview::ReloadEvent>(100);
        let manager = preview::PreviewManager::new(Arc::clone(&site), tx, config.debounce);
        manager.start();
        Some(manager)
    } else {
        None
    };

    let state = Arc::new(AppState {
        site,
        home_slug: config.home_slug.clone(),
        preview,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        backend = %config.backend_url,
        preview = config.preview_enabled,
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from BX config.
#[must_use]
pub fn server_config_from_bx_config(config: &bx_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        backend_url: config.backend.base_url.clone(),
        timeout: Duration::from_secs(config.backend.timeout_secs),
        home_slug: config.site.home_slug.clone(),
        site_title: config.site.title.clone(),
        preview_enabled: config.preview.enabled,
        debounce: Duration::from_millis(config.preview.debounce_ms),
        version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_config_from_bx_config() {
        let mut config = bx_config::Config::default();
        config.server.port = 8088;
        config.backend.base_url = "https://cms.example.com".to_owned();
        config.backend.timeout_secs = 5;
        config.site.title = "Acme".to_owned();
        config.preview.enabled = true;
        config.preview.debounce_ms = 50;

        let server = server_config_from_bx_config(&config, "1.2.3".to_owned());

        assert_eq!(server.port, 8088);
        assert_eq!(server.backend_url, "https://cms.example.com");
        assert_eq!(server.timeout, Duration::from_secs(5));
        assert_eq!(server.site_title, "Acme");
        assert_eq!(server.home_slug, config.site.home_slug);
        assert!(server.preview_enabled);
        assert_eq!(server.debounce, Duration::from_millis(50));
        assert_eq!(server.version, "1.2.3");
    }
}
