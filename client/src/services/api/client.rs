//! # API Client
//!
//! [`BankingApiClient`] turns one domain-level call into one authenticated
//! HTTP round trip, retrying transient failures with exponential backoff.
//!
//! ## Sessions
//!
//! The transport is a scoped resource. [`BankingApiClient::open`] acquires it
//! and hands back a [`Session`] guard; the transport is closed exactly once
//! when the guard drops, whichever way the caller leaves the scope. Requests
//! issued without an open session fail with [`ClientError::NotInitialized`].
//!
//! ```rust,no_run
//! use banking_client::core::BankingApi;
//! use banking_client::services::api::BankingApiClient;
//! use lib_core::Config;
//!
//! # async fn demo() -> banking_client::core::Result<()> {
//! let mut client = BankingApiClient::new(Config::default());
//! let session = client.open()?;
//! let valid = session.validate_account("ACC1000").await?;
//! # let _ = valid;
//! # Ok(())
//! # }
//! ```
//!
//! ## Retry Policy
//!
//! | Outcome | Behaviour |
//! |---|---|
//! | status < 400 | parsed JSON (non-JSON 2xx body → `{"status": "success", "message": body}`) |
//! | status >= 400 | [`ClientError::Api`] immediately, no retry |
//! | timeout / refused or dropped connection | up to `max_retries` more attempts, sleeping 1s, 2s, 4s, ... |
//! | any other transport failure | [`ClientError::Transport`] immediately, no retry |
//! | retries exhausted | [`ClientError::Connection`] naming the configured base URL |

use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lib_core::Config;
use parking_lot::Mutex;
use reqwest::Method;
use serde_json::{json, Value};
use shared::AuthToken;

use super::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
use crate::core::error::{ClientError, Result};
use crate::core::service::BankingApi;

/// Response bodies longer than this are cut in debug logs.
const LOG_BODY_PREVIEW_CHARS: usize = 500;

/// HTTP client for the core banking API.
pub struct BankingApiClient {
    config: Config,
    /// Transport supplied up front; `None` builds a reqwest transport per session.
    transport: Option<Arc<dyn HttpTransport>>,
    session: Option<Arc<dyn HttpTransport>>,
    auth_token: Mutex<Option<AuthToken>>,
}

impl BankingApiClient {
    /// Client that talks HTTP through `reqwest`.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            transport: None,
            session: None,
            auth_token: Mutex::new(None),
        }
    }

    /// Client that sends every request through `transport`.
    pub fn with_transport(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport: Some(transport),
            ..Self::new(config)
        }
    }

    /// Open a session. The transport stays open until the returned guard drops.
    pub fn open(&mut self) -> Result<Session<'_>> {
        let transport: Arc<dyn HttpTransport> = match &self.transport {
            Some(transport) => Arc::clone(transport),
            None => {
                let timeout = Duration::from_secs(self.config.timeout);
                Arc::new(ReqwestTransport::new(timeout).map_err(|e| ClientError::Transport(e.to_string()))?)
            }
        };

        // A guard leaked with mem::forget leaves a stale session behind.
        if let Some(stale) = self.session.replace(transport) {
            stale.close();
        }

        tracing::debug!(base_url = %self.config.base_url, "Session opened");
        Ok(Session { client: self })
    }

    fn close_session(&mut self) {
        if let Some(transport) = self.session.take() {
            transport.close();
            tracing::debug!("Session closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Replace the current token. Expiry is taken from the JWT `exp` claim when present.
    pub fn set_auth_token(&self, token: &str) {
        *self.auth_token.lock() = Some(AuthToken::from_jwt(token));
        tracing::debug!("Authentication token set");
    }

    pub fn clear_auth_token(&self) {
        self.auth_token.lock().take();
    }

    pub fn auth_token(&self) -> Option<AuthToken> {
        self.auth_token.lock().clone()
    }

    /// Swap in `token` until the returned guard drops, then restore whatever
    /// was there before (including nothing).
    pub fn override_auth_token(&self, token: AuthToken) -> TokenOverride<'_> {
        let saved = self.auth_token.lock().replace(token);
        TokenOverride {
            slot: &self.auth_token,
            saved,
        }
    }

    /// Issue one request against `base_url + path`.
    #[tracing::instrument(
        name = "api_request",
        skip(self, body, query),
        fields(request_id = %uuid::Uuid::new_v4())
    )]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &[(&str, String)],
    ) -> Result<Value> {
        let transport = self.session.as_ref().ok_or(ClientError::NotInitialized)?;

        let url = format!("{}{}", self.config.base_url, path);
        let query: Vec<(String, String)> = query
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        let max_retries = self.config.max_retries;

        let mut attempt: u32 = 0;
        loop {
            tracing::debug!(
                "{} {} - Attempt {}/{}",
                method,
                url,
                attempt.saturating_add(1),
                max_retries.saturating_add(1)
            );

            let request = HttpRequest {
                method: method.clone(),
                url: url.clone(),
                query: query.clone(),
                headers: self.auth_headers(),
                body: body.clone(),
            };

            let err = match transport.send(request).await {
                Ok(response) => return handle_response(response),
                Err(err) if err.is_transient() => err,
                Err(err) => {
                    tracing::error!(error = %err, "Unexpected error in API request");
                    return Err(ClientError::Transport(err.to_string()));
                }
            };

            let message = match &err {
                TransportError::Timeout(_) => format!(
                    "Request timeout after {}s: {} {}",
                    self.config.timeout, method, url
                ),
                _ => format!("Connection failed: {}", err),
            };
            tracing::error!("{}", message);

            if attempt >= max_retries {
                return Err(ClientError::Connection(format!(
                    "{}\nPlease ensure the banking server is running at {}",
                    message, self.config.base_url
                )));
            }

            let delay = backoff_delay(attempt);
            tracing::warn!(
                delay_secs = delay.as_secs(),
                next_attempt = attempt.saturating_add(2),
                "Retrying after backoff"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        match self.auth_token.lock().as_ref() {
            Some(token) if !token.is_expired() => {
                vec![("Authorization".to_string(), token.header_value())]
            }
            _ => Vec::new(),
        }
    }
}

/// Wait before retry number `attempt + 1`: 1s, 2s, 4s, ...
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt))
}

fn handle_response(response: HttpResponse) -> Result<Value> {
    let HttpResponse { status, body } = response;

    tracing::debug!(status, "Response status");
    tracing::debug!(body = %preview(&body), "Response body");

    if status >= 400 {
        let message = format!("API error (status {}): {}", status, body);
        tracing::error!("{}", message);
        return Err(ClientError::api(message, Some(status)));
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => Ok(value),
        Err(_) if (200..300).contains(&status) => Ok(json!({
            "status": "success",
            "message": body,
        })),
        Err(_) => Err(ClientError::api(
            format!("Invalid JSON response: {}", body),
            Some(status),
        )),
    }
}

fn preview(body: &str) -> String {
    body.chars().take(LOG_BODY_PREVIEW_CHARS).collect()
}

/// An open session. Dereferences to the client; closes the transport on drop.
pub struct Session<'a> {
    client: &'a mut BankingApiClient,
}

impl Session<'_> {
    /// End the session now rather than at the end of scope.
    pub fn close(self) {}
}

impl Deref for Session<'_> {
    type Target = BankingApiClient;

    fn deref(&self) -> &BankingApiClient {
        &*self.client
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.client.close_session();
    }
}

/// Temporary auth token; restores the previous one on drop.
pub struct TokenOverride<'a> {
    slot: &'a Mutex<Option<AuthToken>>,
    saved: Option<AuthToken>,
}

impl Drop for TokenOverride<'_> {
    fn drop(&mut self) {
        *self.slot.lock() = self.saved.take();
    }
}

// Implement BankingApi trait for BankingApiClient
#[async_trait]
impl BankingApi for BankingApiClient {
    async fn get_auth_token(&self, username: &str, password: &str, claim: &str) -> Result<String> {
        super::auth::get_auth_token(self, username, password, claim).await
    }

    fn set_auth_token(&self, token: &str) {
        BankingApiClient::set_auth_token(self, token)
    }

    async fn validate_account(&self, account_number: &str) -> Result<bool> {
        super::accounts::validate_account(self, account_number).await
    }

    async fn get_account_balance(&self, account_number: &str) -> Result<Value> {
        super::accounts::get_account_balance(self, account_number).await
    }

    async fn list_accounts(&self) -> Result<Vec<Value>> {
        super::accounts::list_accounts(self).await
    }

    async fn transfer(&self, payload: &Value) -> Result<Value> {
        super::transfer::transfer(self, payload).await
    }

    async fn validate_token(&self, token: &str) -> Result<bool> {
        super::auth::validate_token(self, token).await
    }

    async fn get_transaction_history(
        &self,
        account_number: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Value>> {
        super::transactions::get_transaction_history(self, account_number, limit).await
    }
}
