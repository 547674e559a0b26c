//! # Validation Errors
//!
//! Raised by model constructors when domain input is malformed. Never retried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required identifier was empty or whitespace.
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("Source and destination accounts must be different")]
    SameAccount,

    #[error("Transfer amount must be positive")]
    NonPositiveAmount,
}
