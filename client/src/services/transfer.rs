//! # Transfer Service
//!
//! Domain-level operations on top of [`BankingApi`]: typed models in, typed
//! models out.
//!
//! ## Error Policy
//!
//! | Operation | On failure |
//! |---|---|
//! | `authenticate` | logged, `None` |
//! | `validate_account` | logged, `false` |
//! | `validate_token` | logged, `false` |
//! | `transfer`, `get_balance`, `list_accounts`, `get_transaction_history` | propagated |
//!
//! The advisory checks cannot tell "invalid" apart from "server error":
//! both read as `false`.

use shared::{Account, AccountBalance, TransactionRecord, TransferRequest, TransferResponse};

use crate::core::error::Result;
use crate::core::service::BankingApi;

/// Claim requested when authenticating for transfers.
pub const TRANSFER_CLAIM: &str = "transfer";

pub struct TransferService<'a, A: BankingApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: BankingApi + ?Sized> TransferService<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Obtain a transfer-scoped token and install it on the client.
    #[tracing::instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<String> {
        match self.api.get_auth_token(username, password, TRANSFER_CLAIM).await {
            Ok(token) => {
                self.api.set_auth_token(&token);
                tracing::info!("Authenticated");
                Some(token)
            }
            Err(e) => {
                tracing::error!(error = %e, "Authentication failed");
                None
            }
        }
    }

    pub async fn validate_account(&self, account_number: &str) -> bool {
        match self.api.validate_account(account_number).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!(account = %account_number, error = %e, "Account validation error");
                false
            }
        }
    }

    /// Execute `request` and parse the receipt.
    #[tracing::instrument(skip(self, request), fields(transfer = %request))]
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferResponse> {
        let raw = self.api.transfer(&request.to_wire_json()).await?;
        let response = TransferResponse::from_json(&raw);

        tracing::info!(
            transaction_id = %response.transaction_id,
            status = %response.status,
            "Transfer completed"
        );
        Ok(response)
    }

    pub async fn get_balance(&self, account_number: &str) -> Result<AccountBalance> {
        let raw = self.api.get_account_balance(account_number).await?;
        Ok(AccountBalance::from_json(&raw))
    }

    /// All accounts; entries the server sends without an account number are skipped.
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        let raw = self.api.list_accounts().await?;

        let accounts = raw
            .iter()
            .filter_map(|entry| match Account::from_json(entry) {
                Ok(account) => Some(account),
                Err(e) => {
                    tracing::warn!(error = %e, entry = %entry, "Skipping malformed account");
                    None
                }
            })
            .collect();
        Ok(accounts)
    }

    pub async fn validate_token(&self, token: &str) -> bool {
        match self.api.validate_token(token).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!(error = %e, "Token validation error");
                false
            }
        }
    }

    pub async fn get_transaction_history(
        &self,
        account_number: Option<&str>,
        limit: u32,
    ) -> Result<Vec<TransactionRecord>> {
        let raw = self.api.get_transaction_history(account_number, limit).await?;
        Ok(raw.iter().map(TransactionRecord::from_json).collect())
    }
}
