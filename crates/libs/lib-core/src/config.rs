//! # Client Configuration
//!
//! Resolves the banking API settings from three layers, highest priority first:
//!
//! 1. Environment variables (`BANKING_API_URL`, `BANKING_API_TIMEOUT`,
//!    `BANKING_API_MAX_RETRIES`, `LOG_LEVEL`)
//! 2. A JSON configuration file (explicit path, or `config/settings.json`)
//! 3. Built-in defaults
//!
//! ```rust,no_run
//! use lib_core::config::Config;
//!
//! let config = Config::load(None)?;
//! println!("talking to {}", config.base_url);
//! # Ok::<(), lib_core::config::ConfigError>(())
//! ```
//!
//! A missing or malformed file is not fatal: it is logged and the defaults are
//! used instead. Only values that can never work (a non-HTTP base URL, a zero
//! timeout) fail [`Config::validate`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8123";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Location checked when no explicit configuration file is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/settings.json";

pub const ENV_BASE_URL: &str = "BANKING_API_URL";
pub const ENV_TIMEOUT: &str = "BANKING_API_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "BANKING_API_MAX_RETRIES";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to write configuration to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Banking API client settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the banking API, without trailing slash
    pub base_url: String,

    /// Total per-request timeout in seconds
    #[serde(alias = "timeout_seconds")]
    pub timeout: u64,

    /// Additional attempts after a timeout or connection failure
    pub max_retries: u32,

    /// Log level name (`DEBUG`, `INFO`, `WARNING`, ...)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration: file (or defaults), then environment overrides, then validation.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(lib_utils::lookup_env);
        config.normalize();
        config.validate()?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout,
            max_retries = config.max_retries,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Read a JSON configuration file, falling back to defaults when it is
    /// missing or malformed. Keys absent from the file keep their defaults.
    pub fn from_file(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Configuration file not found");
                return Self::default();
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Error loading configuration");
                return Self::default();
            }
        };

        match serde_json::from_str::<Config>(&raw) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                config
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Invalid JSON in configuration file");
                Self::default()
            }
        }
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Numeric values that fail to parse are ignored with a warning and the
    /// previous value is kept.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            match raw.trim().parse() {
                Ok(timeout) => self.timeout = timeout,
                Err(_) => tracing::warn!(value = %raw, "Invalid {} value, keeping {}", ENV_TIMEOUT, self.timeout),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_RETRIES) {
            match raw.trim().parse() {
                Ok(retries) => self.max_retries = retries,
                Err(_) => tracing::warn!(value = %raw, "Invalid {} value, keeping {}", ENV_MAX_RETRIES, self.max_retries),
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
    }

    /// Trim whitespace and the trailing slash from the base URL so that
    /// `base_url + "/path"` never produces `//`.
    pub fn normalize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = trimmed.to_string();
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base_url must start with http:// or https:// (got {:?})",
                self.base_url
            )));
        }

        if self.timeout == 0 {
            return Err(ConfigError::Invalid("timeout must be at least 1 second".to_string()));
        }

        Ok(())
    }

    /// Write the configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let body = serde_json::to_string_pretty(self)?;
        fs::write(path, body).map_err(io_err)?;

        tracing::info!(path = %path.display(), "Configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8123");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.log_level, "INFO");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_everything() {
        let mut config = Config::default();
        config.apply_overrides(env_of(&[
            (ENV_BASE_URL, "https://bank.example.com"),
            (ENV_TIMEOUT, "5"),
            (ENV_MAX_RETRIES, "0"),
            (ENV_LOG_LEVEL, "DEBUG"),
        ]));

        assert_eq!(config.base_url, "https://bank.example.com");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.log_level, "DEBUG");
    }

    #[test]
    fn test_invalid_numeric_env_keeps_previous_value() {
        let mut config = Config {
            timeout: 12,
            max_retries: 7,
            ..Config::default()
        };
        config.apply_overrides(env_of(&[(ENV_TIMEOUT, "soon"), (ENV_MAX_RETRIES, "-1")]));

        assert_eq!(config.timeout, 12);
        assert_eq!(config.max_retries, 7);
    }

    #[test]
    fn test_file_values_with_partial_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"base_url": "http://10.0.0.5:9000", "timeout": 10}"#).unwrap();

        let config = Config::from_file(&path);
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.timeout, 10);
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_file_accepts_timeout_seconds_alias() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"timeout_seconds": 4}"#).unwrap();

        assert_eq!(Config::from_file(&path).timeout, 4);
    }

    #[test]
    fn test_env_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"base_url": "http://file-host:1", "max_retries": 9}"#).unwrap();

        let mut config = Config::from_file(&path);
        config.apply_overrides(env_of(&[(ENV_BASE_URL, "http://env-host:2")]));

        assert_eq!(config.base_url, "http://env-host:2");
        assert_eq!(config.max_retries, 9);
    }

    #[test]
    fn test_missing_or_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::from_file(&dir.path().join("nope.json")), Config::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(Config::from_file(&broken), Config::default());
    }

    #[test]
    fn test_save_then_load_from_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config").join("settings.json");
        let config = Config {
            base_url: "https://bank.internal".to_string(),
            timeout: 15,
            max_retries: 1,
            log_level: "WARNING".to_string(),
        };

        config.save(&path).unwrap();

        assert_eq!(Config::from_file(&path), config);
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        let mut config = Config {
            base_url: " http://localhost:8123/ ".to_string(),
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.base_url, "http://localhost:8123");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_url = Config {
            base_url: "localhost:8123".to_string(),
            ..Config::default()
        };
        assert!(matches!(bad_url.validate(), Err(ConfigError::Invalid(_))));

        let zero_timeout = Config {
            timeout: 0,
            ..Config::default()
        };
        assert!(matches!(zero_timeout.validate(), Err(ConfigError::Invalid(_))));
    }
}
