//! # Transfer Endpoint

use reqwest::Method;
use serde_json::Value;

use super::client::BankingApiClient;
use crate::core::error::Result;

/// `POST /transfer` with a wire-format body (`fromAccount`, `toAccount`, `amount`).
#[tracing::instrument(skip(client, payload))]
pub async fn transfer(client: &BankingApiClient, payload: &Value) -> Result<Value> {
    let from = payload.get("fromAccount").and_then(Value::as_str).unwrap_or_default();
    let to = payload.get("toAccount").and_then(Value::as_str).unwrap_or_default();
    tracing::info!(from = %from, to = %to, "Submitting transfer");

    client
        .request(Method::POST, "/transfer", Some(payload.clone()), &[])
        .await
}
