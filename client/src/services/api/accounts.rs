//! # Account Endpoints
//!
//! Validation, balance and listing under `/accounts`.

use reqwest::Method;
use serde_json::Value;

use super::client::BankingApiClient;
use crate::core::error::Result;

/// `GET /accounts/validate/{account}`; an API error answer means "not valid".
#[tracing::instrument(skip(client))]
pub async fn validate_account(client: &BankingApiClient, account_number: &str) -> Result<bool> {
    let path = format!("/accounts/validate/{}", account_number);

    match client.request(Method::GET, &path, None, &[]).await {
        Ok(response) => Ok(response
            .get("isValid")
            .and_then(|v| v.as_bool())
            .unwrap_or(false)),
        Err(err) if err.is_api() => {
            tracing::warn!(error = %err, "Account validation failed");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

/// `GET /accounts/balance/{account}`, returned as received.
#[tracing::instrument(skip(client))]
pub async fn get_account_balance(client: &BankingApiClient, account_number: &str) -> Result<Value> {
    let path = format!("/accounts/balance/{}", account_number);
    client.request(Method::GET, &path, None, &[]).await
}

/// `GET /accounts`. Accepts `{"accounts": [...]}` or a bare array.
#[tracing::instrument(skip(client))]
pub async fn list_accounts(client: &BankingApiClient) -> Result<Vec<Value>> {
    let response = client.request(Method::GET, "/accounts", None, &[]).await?;
    Ok(accounts_from_response(response))
}

fn accounts_from_response(response: Value) -> Vec<Value> {
    match response {
        Value::Array(accounts) => accounts,
        Value::Object(mut map) => match map.remove("accounts") {
            Some(Value::Array(accounts)) => accounts,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
