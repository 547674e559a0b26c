//! Logging configuration from environment variables

use std::path::PathBuf;

/// Log directory used when `BANKING_LOG_DIR` is unset.
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "banking-client.log";

/// Logging setup resolved before the configuration file is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory holding the log file
    pub log_dir: PathBuf,
    /// `EnvFilter` directives, e.g. `warn,banking_client=info,lib_core=info`
    pub filter: String,
    /// Set when `RUST_LOG` or `--debug` chose the filter; the configured
    /// `log_level` must not override it later.
    pub pinned: bool,
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env(debug: bool) -> Self {
        Self::from_lookup(debug, lib_utils::lookup_env)
    }

    pub fn from_lookup<F>(debug: bool, lookup: F) -> Self
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let log_dir = lookup("BANKING_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        let (filter, pinned) = if let Some(rust_log) = lookup("RUST_LOG") {
            (rust_log, true)
        } else if debug {
            (filter_for("debug"), true)
        } else {
            let level = lookup("LOG_LEVEL")
                .as_deref()
                .and_then(level_directive)
                .unwrap_or("info");
            (filter_for(level), false)
        };

        Self {
            log_dir,
            filter,
            pinned,
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

/// Map a configured level name (`DEBUG`, `WARNING`, ...) to a tracing directive.
pub fn level_directive(name: &str) -> Option<&'static str> {
    match name.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Some("trace"),
        "DEBUG" => Some("debug"),
        "INFO" => Some("info"),
        "WARN" | "WARNING" => Some("warn"),
        "ERROR" | "CRITICAL" => Some("error"),
        _ => None,
    }
}

/// Filter that applies `level` to this client and keeps dependencies at warn.
pub fn filter_for(level: &str) -> String {
    format!("warn,banking_client={level},lib_core={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&'static str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_level_names() {
        assert_eq!(level_directive("DEBUG"), Some("debug"));
        assert_eq!(level_directive("warning"), Some("warn"));
        assert_eq!(level_directive("CRITICAL"), Some("error"));
        assert_eq!(level_directive("loud"), None);
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::from_lookup(false, lookup_of(&[]));
        assert_eq!(config.log_file(), PathBuf::from("logs/banking-client.log"));
        assert_eq!(config.filter, "warn,banking_client=info,lib_core=info");
        assert!(!config.pinned);
    }

    #[test]
    fn test_rust_log_beats_debug_flag() {
        let config = LogConfig::from_lookup(true, lookup_of(&[("RUST_LOG", "trace")]));
        assert_eq!(config.filter, "trace");
        assert!(config.pinned);
    }

    #[test]
    fn test_debug_flag_pins_debug_level() {
        let config = LogConfig::from_lookup(true, lookup_of(&[("LOG_LEVEL", "ERROR")]));
        assert_eq!(config.filter, filter_for("debug"));
        assert!(config.pinned);
    }

    #[test]
    fn test_log_level_env_and_dir() {
        let config = LogConfig::from_lookup(
            false,
            lookup_of(&[("LOG_LEVEL", "WARNING"), ("BANKING_LOG_DIR", "/tmp/bank")]),
        );
        assert_eq!(config.filter, filter_for("warn"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/bank"));
    }
}
