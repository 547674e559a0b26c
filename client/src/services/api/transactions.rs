//! # Transaction History Endpoint

use reqwest::Method;
use serde_json::Value;

use super::client::BankingApiClient;
use crate::core::error::Result;

/// `GET /transactions/history?limit=N[&accountNumber=...]`.
///
/// Returns the `transactions` array, or nothing when the response has none.
#[tracing::instrument(skip(client))]
pub async fn get_transaction_history(
    client: &BankingApiClient,
    account_number: Option<&str>,
    limit: u32,
) -> Result<Vec<Value>> {
    let mut query = vec![("limit", limit.to_string())];
    if let Some(account) = account_number {
        query.push(("accountNumber", account.to_string()));
    }

    let response = client
        .request(Method::GET, "/transactions/history", None, &query)
        .await?;

    match response {
        Value::Object(mut map) => match map.remove("transactions") {
            Some(Value::Array(transactions)) => Ok(transactions),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}
