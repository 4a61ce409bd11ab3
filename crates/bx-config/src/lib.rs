//! Configuration management for BX.
//!
//! Parses `bx.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `backend.base_url`

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override CMS backend base URL.
    pub backend_url: Option<String>,
    /// Override preview enabled flag.
    pub preview_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "bx.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// CMS backend configuration.
    pub backend: BackendConfig,
    /// Site presentation configuration.
    pub site: SiteConfig,
    /// Live preview configuration.
    pub preview: PreviewConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// CMS backend configuration.
///
/// Pages are fetched from `{base_url}/api/pages/{slug}`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend base URL (without the `/api` suffix).
    pub base_url: String,
    /// Global HTTP timeout for page fetches, in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Site presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Slug rendered for the root URL.
    pub home_slug: String,
    /// Site title used in the document `<title>`.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_slug: "home".to_owned(),
            title: "Bellatrix".to_owned(),
        }
    }
}

/// Live preview configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Whether the preview endpoints are mounted.
    pub enabled: bool,
    /// Quiet period before a page update notification triggers a refresh.
    pub debounce_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            debounce_ms: 250,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`backend.base_url`").
        field: String,
        /// Error message (e.g., "${`CMS_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `bx.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values. The merged result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(backend_url) = &settings.backend_url {
            self.backend.base_url.clone_from(backend_url);
        }
        if let Some(preview_enabled) = settings.preview_enabled {
            self.preview.enabled = preview_enabled;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_backend()?;
        self.validate_site()?;
        self.validate_preview()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_backend(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.backend.base_url, "backend.base_url")?;
        require_http_url(&self.backend.base_url, "backend.base_url")?;

        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "backend.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.home_slug, "site.home_slug")?;
        if self.site.home_slug.contains('/') {
            return Err(ConfigError::Validation(
                "site.home_slug must be a single path segment".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_preview(&self) -> Result<(), ConfigError> {
        const MAX_DEBOUNCE_MS: u64 = 10_000;

        if self.preview.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::Validation(format!(
                "preview.debounce_ms cannot exceed {MAX_DEBOUNCE_MS}"
            )));
        }
        Ok(())
    }

    /// Expand `${VAR}` references from the process environment.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.expand_with(|var| std::env::var(var).ok())
    }

    /// Expand `${VAR}` references in the expandable fields using `lookup`.
    ///
    /// Fields without `${` are left untouched, so a bare `$` in a host or
    /// URL survives.
    fn expand_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let fields = [
            ("server.host", &mut self.server.host),
            ("backend.base_url", &mut self.backend.base_url),
        ];
        for (field, value) in fields {
            if !value.contains("${") {
                continue;
            }
            let expanded = shellexpand::env_with_context(value.as_str(), |var| {
                lookup(var).map(Some).ok_or(())
            })
            .map_err(|e| ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} not set", e.var_name),
            })?
            .into_owned();
            *value = expanded;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
        assert_eq!(config.backend.base_url, "http://localhost:5000");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.site.home_slug, "home");
        assert!(!config.preview.enabled);
        assert_eq!(config.preview.debounce_ms, 250);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 7878);
        assert_eq!(config.site.title, "Bellatrix");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000

[backend]
base_url = "https://cms.example.com"
timeout_secs = 5

[site]
home_slug = "landing"
title = "Example"

[preview]
enabled = true
debounce_ms = 100
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.backend.base_url, "https://cms.example.com");
        assert_eq!(config.backend.timeout_secs, 5);
        assert_eq!(config.site.home_slug, "landing");
        assert_eq!(config.site.title, "Example");
        assert!(config.preview.enabled);
        assert_eq!(config.preview.debounce_ms, 100);
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bx.toml");
        std::fs::write(&path, "[server]\nport = 8123\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 8123);
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/bx.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bx.toml");
        std::fs::write(&path, "[server\nport = 1").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_applies_cli_settings_before_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bx.toml");
        std::fs::write(&path, "[backend]\nbase_url = \"not-a-url\"\n").unwrap();

        let settings = CliSettings {
            backend_url: Some("https://cms.example.com".to_owned()),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.backend.base_url, "https://cms.example.com");
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default();
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            backend_url: Some("https://cms.example.com".to_owned()),
            preview_enabled: Some(true),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.backend.base_url, "https://cms.example.com");
        assert!(config.preview.enabled);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.backend.base_url, "http://localhost:5000");
        assert!(!config.preview.enabled);
    }

    #[test]
    fn test_expand_env_vars_backend_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("BX_TEST_CMS_URL", "https://cms.test.com");
        }

        let toml = r#"
[backend]
base_url = "${BX_TEST_CMS_URL}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.backend.base_url, "https://cms.test.com");

        unsafe {
            std::env::remove_var("BX_TEST_CMS_URL");
        }
    }

    fn lookup(var: &str) -> Option<String> {
        match var {
            "CMS_HOST" => Some("cms.example.com".to_owned()),
            "BIND_HOST" => Some("0.0.0.0".to_owned()),
            _ => None,
        }
    }

    #[test]
    fn test_expand_host_and_base_url() {
        let mut config = Config::default();
        config.server.host = "${BIND_HOST}".to_owned();
        config.backend.base_url = "https://${CMS_HOST}/cms".to_owned();

        config.expand_with(lookup).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.backend.base_url, "https://cms.example.com/cms");
    }

    #[test]
    fn test_expand_unset_var_uses_default() {
        let mut config = Config::default();
        config.backend.base_url = "${CMS_URL:-http://localhost:5000}".to_owned();

        config.expand_with(lookup).unwrap();

        assert_eq!(config.backend.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_expand_unset_var_names_field() {
        let mut config = Config::default();
        config.server.host = "${BIND_ADDR}".to_owned();

        let err = config.expand_with(lookup).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "server.host"));
        assert_eq!(
            err.to_string(),
            "Environment variable error in server.host: ${BIND_ADDR} not set"
        );
    }

    #[test]
    fn test_expand_leaves_other_fields_literal() {
        let mut config = Config::default();
        config.site.title = "${CMS_HOST}".to_owned();
        config.site.home_slug = "$home".to_owned();

        config.expand_with(lookup).unwrap();

        assert_eq!(config.site.title, "${CMS_HOST}");
        assert_eq!(config.site.home_slug, "$home");
        assert_eq!(config.backend.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_load_reports_unset_var_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bx.toml");
        std::fs::write(&path, "[backend]\nbase_url = \"${BX_TEST_NEVER_SET_URL}\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "backend.base_url"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default();
        config.server.host = String::new();
        assert_validation_error(&config, &["server.host", "empty"]);
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert_validation_error(&config, &["server.port"]);
    }

    #[test]
    fn test_validate_backend_url_scheme() {
        let mut config = Config::default();
        config.backend.base_url = "ftp://cms.example.com".to_owned();
        assert_validation_error(&config, &["backend.base_url", "http"]);
    }

    #[test]
    fn test_validate_backend_timeout_zero() {
        let mut config = Config::default();
        config.backend.timeout_secs = 0;
        assert_validation_error(&config, &["timeout_secs", "greater than 0"]);
    }

    #[test]
    fn test_validate_home_slug_with_slash() {
        let mut config = Config::default();
        config.site.home_slug = "a/b".to_owned();
        assert_validation_error(&config, &["site.home_slug"]);
    }

    #[test]
    fn test_validate_preview_debounce_too_high() {
        let mut config = Config::default();
        config.preview.debounce_ms = 60_000;
        assert_validation_error(&config, &["debounce_ms", "10000"]);
    }
}
