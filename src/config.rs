//! User configuration.
//!
//! Settings come from `config.toml` in the app config directory (or the
//! file given with `--config`), then CLI flags and environment variables
//! override individual values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::cli::args::Args;
use crate::constants;

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the backend serving `/foods`.
    pub api_url: String,
    /// Milliseconds between UI ticks.
    pub tick_rate_ms: u64,
    /// Per-request timeout; unset means wait indefinitely.
    pub request_timeout_secs: Option<u64>,
    /// `tracing` filter directive, e.g. `info` or `foodboard=debug`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            tick_rate_ms: constants::DEFAULT_TICK_RATE,
            request_timeout_secs: None,
            log_level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Where the loaded settings came from, for the startup log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl AppConfig {
    /// Reads `path`. A missing file yields defaults; a malformed one is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<(Self, ConfigSource)> {
        if !path.is_file() {
            return Ok((Self::default(), ConfigSource::Defaults));
        }
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&raw).wrap_err_with(|| format!("Invalid {}", path.display()))?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Parses TOML text; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML, mistyped values, or a zero tick rate.
    pub fn parse(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        if config.tick_rate_ms == 0 {
            return Err(eyre!("tick_rate_ms must be at least 1"));
        }
        Ok(config)
    }

    /// Applies CLI flags (and their environment fallbacks) on top of file values.
    #[must_use]
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(url) = &args.api_url {
            self.api_url.clone_from(url);
        }
        if let Some(tick) = args.tick_rate {
            self.tick_rate_ms = tick;
        }
        if let Some(level) = &args.log_level {
            self.log_level.clone_from(level);
        }
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// `~/.config/foodboard` or the platform equivalent.
///
/// # Errors
///
/// Returns an error if the platform has no config directory.
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(constants::APP_NAME))
        .ok_or_else(|| eyre!("Could not determine the user config directory"))
}

/// Config file named on the command line, or the default location.
///
/// # Errors
///
/// Returns an error if no path was given and the config directory is unknown.
pub fn resolve_config_path(args: &Args) -> Result<PathBuf> {
    match &args.config {
        Some(path) => Ok(path.clone()),
        None => Ok(config_dir()?.join(constants::CONFIG_FILE_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config = AppConfig::parse(r#"api_url = "http://menu.local:8080/api""#).unwrap();
        assert_eq!(config.api_url, "http://menu.local:8080/api");
        assert_eq!(config.tick_rate_ms, constants::DEFAULT_TICK_RATE);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_full_file() {
        let raw = r#"
api_url = "http://127.0.0.1:3333"
tick_rate_ms = 100
request_timeout_secs = 10
log_level = "debug"
"#;
        let config = AppConfig::parse(raw).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(AppConfig::parse("tick_rate_ms = \"fast\"").is_err());
    }

    #[test]
    fn test_parse_rejects_zero_tick_rate() {
        let err = AppConfig::parse("tick_rate_ms = 0").unwrap_err();
        assert!(err.to_string().contains("tick_rate_ms"));
    }

    #[test]
    fn test_load_missing_file_is_defaults() {
        let path = std::env::temp_dir().join("foodboard-test-missing/config.toml");
        let (config, source) = AppConfig::load(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("foodboard-test-{}.toml", std::process::id()));
        std::fs::write(&path, "tick_rate_ms = 500\n").unwrap();

        let (config, source) = AppConfig::load(&path).unwrap();
        assert_eq!(config.tick_rate_ms, 500);
        assert_eq!(source, ConfigSource::File(path.clone()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_cli_overrides_file() {
        let args = Args::parse_from([
            "foodboard",
            "--api-url",
            "http://override:1",
            "--tick-rate",
            "40",
        ]);
        let config = AppConfig::parse("api_url = \"http://file:2\"\nlog_level = \"warn\"")
            .unwrap()
            .with_overrides(&args);

        assert_eq!(config.api_url, "http://override:1");
        assert_eq!(config.tick_rate_ms, 40);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_resolve_explicit_config_path() {
        let args = Args::parse_from(["foodboard", "--config", "/tmp/menu.toml"]);
        assert_eq!(
            resolve_config_path(&args).unwrap(),
            PathBuf::from("/tmp/menu.toml")
        );
    }
}
