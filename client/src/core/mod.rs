//! # Core Abstractions
//!
//! Error types and the [`BankingApi`] trait that decouples the transfer
//! service from the concrete HTTP client.
//!
//! - **[`error`]**: [`ClientError`], [`Result<T>`]
//! - **[`service`]**: [`BankingApi`]

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::BankingApi;
