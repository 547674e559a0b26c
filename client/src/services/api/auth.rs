//! # Authentication Endpoints
//!
//! Token issuance (`POST /authToken`) and validation (`POST /auth/validate`).

use reqwest::Method;
use serde_json::json;
use shared::{text_field, AuthToken};

use super::client::BankingApiClient;
use crate::core::error::{ClientError, Result};

/// Obtain a JWT for `username`, scoped to `claim` (`enquiry` or `transfer`).
#[tracing::instrument(skip(client, password))]
pub async fn get_auth_token(
    client: &BankingApiClient,
    username: &str,
    password: &str,
    claim: &str,
) -> Result<String> {
    tracing::info!("Requesting authentication token");

    let body = json!({
        "username": username,
        "password": password,
    });
    let response = client
        .request(Method::POST, "/authToken", Some(body), &[("claim", claim.to_string())])
        .await?;

    match text_field(&response, "token") {
        Some(token) if !token.is_empty() => {
            tracing::info!("Authentication token obtained");
            Ok(token)
        }
        _ => {
            tracing::warn!("Authentication response carried no token");
            Err(ClientError::api("No token in authentication response", None))
        }
    }
}

/// Ask the server whether `token` is valid.
///
/// The token is presented in place of the current one for this single call;
/// the previous token is back in place afterwards whatever the outcome. An
/// API error answer counts as "not valid".
#[tracing::instrument(skip(client, token))]
pub async fn validate_token(client: &BankingApiClient, token: &str) -> Result<bool> {
    let _override = client.override_auth_token(AuthToken::new(token));

    match client.request(Method::POST, "/auth/validate", None, &[]).await {
        Ok(response) => Ok(response
            .get("valid")
            .and_then(|v| v.as_bool())
            .unwrap_or(false)),
        Err(err) if err.is_api() => {
            tracing::warn!(error = %err, "Token validation failed");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
