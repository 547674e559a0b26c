//! # Core Library
//!
//! Configuration shared by every part of the banking client.

pub mod config;

// Re-export commonly used types
pub use config::{Config, ConfigError};
