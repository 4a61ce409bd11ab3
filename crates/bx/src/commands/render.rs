//! `bx render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bx_config::{CliSettings, Config};
use bx_sections::StaticLoader;
use bx_site::{HttpPageSource, PageStatus, Site};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Slug of the page to render.
    slug: String,

    /// Path to configuration file (default: auto-discover bx.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CMS backend base URL (overrides config).
    #[arg(long, env = "BX_BACKEND_URL")]
    backend_url: Option<String>,

    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (section load logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the document cannot be
    /// written, or the page is missing or failed to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            backend_url: self.backend_url,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = HttpPageSource::new(
            &config.backend.base_url,
            Duration::from_secs(config.backend.timeout_secs),
        );
        let site = Site::new(source, StaticLoader, config.site.title.clone());

        render_to(&site, &self.slug, self.output.as_deref())
    }
}

/// Render `slug` and write the document to `output`, or stdout.
///
/// The document is written even for missing or failed pages, so the screen
/// shown to visitors can be inspected; the page outcome is still an error.
fn render_to(site: &Site, slug: &str, output: Option<&Path>) -> Result<(), CliError> {
    let page = site.render(slug);
    let html = page.document().render();

    match output {
        Some(path) => {
            std::fs::write(path, &html)?;
            Output::new().success(&format!("Wrote {slug} to {}", path.display()));
        }
        None => std::io::stdout().lock().write_all(html.as_bytes())?,
    }

    match page.status {
        PageStatus::Ok => Ok(()),
        PageStatus::NotFound => Err(CliError::Page {
            slug: slug.to_owned(),
            reason: "was not found",
        }),
        PageStatus::Error => Err(CliError::Page {
            slug: slug.to_owned(),
            reason: "failed to load",
        }),
    }
}
