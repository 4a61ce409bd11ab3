//! CLI error types.

use bx_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Server(String),

    #[error("Page '{slug}' {reason}")]
    Page { slug: String, reason: &'static str },

    #[error("{0}")]
    Validation(String),
}
