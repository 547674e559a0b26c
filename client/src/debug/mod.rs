//! # Logging
//!
//! `tracing` output to stderr and to `logs/banking-client.log`.
//!
//! ## Filter precedence
//!
//! 1. `RUST_LOG`
//! 2. `--debug`
//! 3. `log_level` from the configuration (`LOG_LEVEL`, config file, `INFO`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use banking_client::debug::{self, LogConfig};
//!
//! let log = debug::init_logger(&LogConfig::from_env(false));
//! // ... load configuration ...
//! log.apply_level("DEBUG");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Full filter override (e.g., `banking_client=trace,warn`)
//! - `BANKING_LOG_DIR`: Log directory (default: `logs`)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init as init_logger, LogHandle};
