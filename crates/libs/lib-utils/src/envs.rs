//! # Environment Variables
//!
//! Utilities for reading environment variables.

use std::env;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Process-environment lookup usable wherever a `Fn(&str) -> Option<String>`
/// source is expected. Empty values count as unset.
pub fn lookup_env(name: &'static str) -> Option<String> {
    get_env(name).ok().filter(|value| !value.is_empty())
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    MissingEnv(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
