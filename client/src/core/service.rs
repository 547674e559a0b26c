//! # Service Traits
//!
//! The banking API surface as a trait, so the transfer service can run
//! against the real client or any stand-in.

use async_trait::async_trait;
use serde_json::Value;

use super::error::Result;

/// Operations offered by the core banking API.
///
/// Implemented by [`BankingApiClient`](crate::services::api::BankingApiClient).
/// Error policy per operation follows the client: `validate_account` and
/// `validate_token` map API errors to `false`, everything else propagates.
#[async_trait]
pub trait BankingApi: Send + Sync {
    /// Obtain a JWT for `username` scoped to `claim` (`enquiry` or `transfer`).
    async fn get_auth_token(&self, username: &str, password: &str, claim: &str) -> Result<String>;

    /// Use `token` for subsequent requests.
    fn set_auth_token(&self, token: &str);

    /// Whether the account exists and is active.
    async fn validate_account(&self, account_number: &str) -> Result<bool>;

    /// Raw balance object for an account.
    async fn get_account_balance(&self, account_number: &str) -> Result<Value>;

    /// Raw account objects.
    async fn list_accounts(&self) -> Result<Vec<Value>>;

    /// Execute a transfer with a wire-format body.
    async fn transfer(&self, payload: &Value) -> Result<Value>;

    /// Ask the server whether `token` is valid, without disturbing the current token.
    async fn validate_token(&self, token: &str) -> Result<bool>;

    /// Raw transaction history entries, at most `limit`.
    async fn get_transaction_history(
        &self,
        account_number: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Value>>;
}
