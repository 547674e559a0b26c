//! # Utilities Library
//!
//! Small helpers shared by the banking client crates: environment variables,
//! UTC time, base64url decoding and blank-string checks.

pub mod b64;
pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64u_decode, b64u_decode_to_string, b64u_encode};
pub use envs::{get_env, lookup_env};
pub use time::{format_time, from_unix_seconds, now_utc, parse_utc};
pub use validation::non_blank;
