//! # Shared Banking Models
//!
//! Domain records exchanged with the core banking API, plus the helpers that
//! turn loosely-typed server JSON into them.
//!
//! ## Structure
//!
//! - **[`dto`]**: Domain records
//!   - **[`dto::auth`]**: [`AuthToken`]
//!   - **[`dto::account`]**: [`Account`], [`AccountBalance`]
//!   - **[`dto::transfer`]**: [`TransferRequest`], [`TransferResponse`]
//!   - **[`dto::transaction`]**: [`TransactionRecord`]
//! - **[`error`]**: [`ValidationError`] raised by constructors
//! - **[`utils`]**: JSON field readers and money formatting
//!
//! ## Wire Format
//!
//! The banking API speaks camelCase JSON (`fromAccount`, `transactionId`, ...)
//! and is lax about types: amounts arrive as JSON numbers or strings, and most
//! fields may be missing. Records therefore parse from [`serde_json::Value`]
//! with explicit defaults instead of strict `Deserialize` impls, while amounts
//! are held as [`rust_decimal::Decimal`] so no money ever passes through `f64`
//! except on the way out in [`TransferRequest::to_wire_json`].
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shared::TransferRequest;
//!
//! let request = TransferRequest::new("ACC1000", "ACC1001", Decimal::new(10000, 2))?;
//! assert_eq!(request.to_string(), "ACC1000 → ACC1001: $100.00");
//! # Ok::<(), shared::ValidationError>(())
//! ```

pub mod dto;
pub mod error;
pub mod utils;

pub use dto::*;
pub use error::ValidationError;
pub use utils::*;
