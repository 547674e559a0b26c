//! # Services Module
//!
//! ```text
//! services/
//! ├── api/         - HTTP client for the banking API
//! │                  (sessions, retries, endpoints)
//! └── transfer.rs  - Domain-level operations on top of the client
//!                    (typed models, error policy)
//! ```
//!
//! ```text
//! ┌────────────────────┐     ┌────────────────────┐     ┌──────────────────┐
//! │  TransferService   │ ──▶ │  BankingApiClient  │ ──▶ │  Banking server  │
//! │  typed models      │     │  JSON + retries    │     │  /accounts, ...  │
//! └────────────────────┘     └────────────────────┘     └──────────────────┘
//! ```

pub mod api;
pub mod transfer;

pub use transfer::TransferService;
