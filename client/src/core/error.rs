//! # Client Error Types
//!
//! Consolidated error handling for the banking client.
//!
//! ## Error Categories
//!
//! - **Validation**: malformed domain input, raised before anything is sent
//! - **Api**: the server answered with an error status or an unusable body
//! - **Connection**: timeout, refused or dropped connection, after all retries
//! - **Transport**: the request could not be carried at all (client setup,
//!   malformed request); never a server answer
//! - **NotInitialized**: a request was issued without an open session
//! - **Config**: configuration could not be loaded, validated or saved
//!
//! Only transient transport failures are retried, and only inside
//! [`BankingApiClient::request`](crate::services::api::BankingApiClient::request).
//! Everything that reaches a caller is final.
//!
//! ```rust
//! use banking_client::core::error::ClientError;
//!
//! let err = ClientError::api("API error (status 404): not found", Some(404));
//! assert_eq!(err.status_code(), Some(404));
//! assert_eq!(err.to_string(), "API error (status 404): not found");
//! ```

use lib_core::ConfigError;
use shared::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Domain input rejected at construction time.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Error status from the server, or a response the client could not use.
    ///
    /// `status_code` is `None` when no HTTP status applies (missing token
    /// field, request that never produced a response).
    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// Timeout or connection failure that outlived every retry.
    #[error("{0}")]
    Connection(String),

    /// Local HTTP failure that is neither a server answer nor a network outage.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Request issued outside an open session.
    #[error("Client session not initialized. Open a session before issuing requests.")]
    NotInitialized,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    pub fn api(message: impl Into<String>, status_code: Option<u16>) -> Self {
        ClientError::Api {
            message: message.into(),
            status_code,
        }
    }

    /// HTTP status carried by an [`ClientError::Api`] error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
