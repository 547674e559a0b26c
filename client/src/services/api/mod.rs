//! # Banking API Client Module
//!
//! HTTP client for the core banking API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports
//! ├── client.rs        - BankingApiClient, sessions and the retry loop
//! ├── transport.rs     - HttpTransport seam and the reqwest implementation
//! ├── auth.rs          - Token issuance and validation
//! ├── accounts.rs      - Account validation, balance and listing
//! ├── transfer.rs      - Fund transfer
//! └── transactions.rs  - Transaction history
//! ```

pub mod accounts;
pub mod auth;
pub mod client;
pub mod transactions;
pub mod transfer;
pub mod transport;

pub use client::{backoff_delay, BankingApiClient, Session, TokenOverride};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
