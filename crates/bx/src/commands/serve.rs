//! `bx serve` command implementation.

use std::path::PathBuf;

use bx_config::{CliSettings, Config};
use bx_server::{run_server, server_config_from_bx_config};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover bx.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// CMS backend base URL (overrides config).
    #[arg(long, env = "BX_BACKEND_URL")]
    backend_url: Option<String>,

    /// Enable verbose output (page load and preview logs).
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable live preview (default: from config).
    #[arg(long)]
    preview: Option<bool>,

    /// Disable live preview.
    #[arg(long, conflicts_with = "preview")]
    no_preview: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let preview_enabled = self.resolve_preview_enabled();
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            backend_url: self.backend_url,
            preview_enabled,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.highlight(&format!(
            "Serving {} on http://{}:{}",
            config.site.title, config.server.host, config.server.port
        ));
        if let Some(path) = &config.config_path {
            output.entry("Config", &path.display().to_string());
        }
        output.entry("Backend", &config.backend.base_url);
        output.entry("Home page", &config.site.home_slug);
        if config.preview.enabled {
            output.entry(
                "Preview",
                &format!(
                    "http://{}:{}/preview",
                    config.server.host, config.server.port
                ),
            );
        } else {
            output.entry("Preview", "disabled");
        }

        let server_config = server_config_from_bx_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Resolve `preview_enabled` from --preview/--no-preview flags.
    fn resolve_preview_enabled(&self) -> Option<bool> {
        self.no_preview.then_some(false).or(self.preview)
    }
}
