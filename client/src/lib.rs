//! # Banking Client - Library Root
//!
//! Command-line client for a core banking API: authenticate, validate
//! accounts, query balances and history, transfer funds. This library crate
//! contains everything the binary (`main.rs`) uses.
//!
//! ## Architecture
//!
//! ```text
//! main.rs
//!   │
//!   ├── debug     (tracing: stderr + logs/banking-client.log)
//!   ├── lib_core  (Config: env > file > defaults)
//!   │
//!   └── app       (flags, flow, console output)
//!         │
//!         └── services::TransferService      typed models, error policy
//!               │
//!               └── services::api::BankingApiClient
//!                     │  sessions, auth header, retry with backoff
//!                     └── HttpTransport ──HTTP/JSON──▶ banking server
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Argument parsing, command flow and output formatting
//! - **core**: [`ClientError`] and the [`BankingApi`](core::BankingApi) trait
//! - **debug**: Logging setup
//! - **services**: The HTTP client and the transfer service
//!
//! ## Usage
//!
//! ```rust,no_run
//! use banking_client::services::{api::BankingApiClient, TransferService};
//! use lib_core::Config;
//! use rust_decimal::Decimal;
//! use shared::TransferRequest;
//!
//! # async fn demo() -> banking_client::Result<()> {
//! let mut client = BankingApiClient::new(Config::load(None)?);
//! let session = client.open()?;
//! let service = TransferService::new(&*session);
//!
//! service.authenticate("alice", "any").await;
//! let request = TransferRequest::new("ACC1000", "ACC1001", Decimal::new(10000, 2))?;
//! let receipt = service.transfer(&request).await?;
//! println!("{}", receipt.transaction_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p banking-client
//! ```
//!
//! Integration tests in `tests/` drive the client through a scripted
//! [`HttpTransport`](services::api::HttpTransport); no server is needed.

pub mod app;
pub mod core;
pub mod debug;
pub mod services;

pub use crate::core::{BankingApi, ClientError, Result};
pub use services::api::BankingApiClient;
pub use services::TransferService;
