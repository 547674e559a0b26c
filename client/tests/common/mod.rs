//! Test fixtures shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use banking_client::services::api::{BankingApiClient, HttpRequest, HttpResponse, HttpTransport, TransportError};
use lib_core::Config;
use parking_lot::Mutex;
use serde_json::Value;

pub const BASE_URL: &str = "http://bank.test:8123";

/// Replays queued outcomes in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    closes: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.script.lock().push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.script.lock().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("script exhausted".to_string())))
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn config(max_retries: u32) -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        timeout: 5,
        max_retries,
        ..Config::default()
    }
}

pub fn client_with(transport: &Arc<ScriptedTransport>, max_retries: u32) -> BankingApiClient {
    BankingApiClient::with_transport(config(max_retries), transport.clone())
}

/// Unsigned JWT whose payload carries `exp`.
pub fn jwt_with_exp(exp: i64) -> String {
    let header = lib_utils::b64u_encode(r#"{"alg":"none","typ":"JWT"}"#);
    let payload = lib_utils::b64u_encode(format!(r#"{{"sub":"alice","exp":{}}}"#, exp));
    format!("{}.{}.sig", header, payload)
}
