mod common;

use async_trait::async_trait;
use banking_client::core::{BankingApi, Result};
use banking_client::{ClientError, TransferService};
use common::{client_with, ScriptedTransport};
use parking_lot::Mutex;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use shared::TransferRequest;

/// In-memory API: two valid accounts, tokens of the form `tok-<claim>`.
#[derive(Default)]
struct FakeApi {
    down: bool,
    installed_token: Mutex<Option<String>>,
    transfers: Mutex<Vec<Value>>,
    accounts: Vec<Value>,
    history: Vec<Value>,
}

impl FakeApi {
    fn down() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.down {
            Err(ClientError::Connection("server down".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BankingApi for FakeApi {
    async fn get_auth_token(&self, _username: &str, _password: &str, claim: &str) -> Result<String> {
        self.check()?;
        Ok(format!("tok-{}", claim))
    }

    fn set_auth_token(&self, token: &str) {
        *self.installed_token.lock() = Some(token.to_string());
    }

    async fn validate_account(&self, account_number: &str) -> Result<bool> {
        self.check()?;
        Ok(matches!(account_number, "ACC1000" | "ACC1001"))
    }

    async fn get_account_balance(&self, account_number: &str) -> Result<Value> {
        self.check()?;
        Ok(json!({"accountId": account_number, "balance": "1250.75"}))
    }

    async fn list_accounts(&self) -> Result<Vec<Value>> {
        self.check()?;
        Ok(self.accounts.clone())
    }

    async fn transfer(&self, payload: &Value) -> Result<Value> {
        self.check()?;
        self.transfers.lock().push(payload.clone());
        Ok(json!({
            "transactionId": "TX-42",
            "status": "SUCCESS",
            "fromAccount": payload["fromAccount"],
            "toAccount": payload["toAccount"],
            "amount": payload["amount"],
            "issuedAt": "2025-11-01T10:00:00",
            "newFromAccountBalance": 899.5,
        }))
    }

    async fn validate_token(&self, token: &str) -> Result<bool> {
        self.check()?;
        Ok(token.starts_with("tok-"))
    }

    async fn get_transaction_history(&self, _account_number: Option<&str>, limit: u32) -> Result<Vec<Value>> {
        self.check()?;
        Ok(self.history.iter().take(limit as usize).cloned().collect())
    }
}

#[tokio::test]
async fn test_authenticate_requests_transfer_claim_and_installs_token() {
    let api = FakeApi::default();
    let service = TransferService::new(&api);

    assert_eq!(service.authenticate("alice", "any").await.as_deref(), Some("tok-transfer"));
    assert_eq!(api.installed_token.lock().as_deref(), Some("tok-transfer"));
}

#[tokio::test]
async fn test_authenticate_failure_is_none() {
    let api = FakeApi::down();
    let service = TransferService::new(&api);

    assert_eq!(service.authenticate("alice", "any").await, None);
    assert!(api.installed_token.lock().is_none());
}

#[tokio::test]
async fn test_advisory_checks_swallow_errors() {
    let api = FakeApi::default();
    let service = TransferService::new(&api);
    assert!(service.validate_account("ACC1000").await);
    assert!(!service.validate_account("ACC9999").await);
    assert!(service.validate_token("tok-transfer").await);
    assert!(!service.validate_token("forged").await);

    let down = FakeApi::down();
    let service = TransferService::new(&down);
    assert!(!service.validate_account("ACC1000").await);
    assert!(!service.validate_token("tok-transfer").await);
}

#[tokio::test]
async fn test_transfer_sends_wire_json_and_parses_receipt() {
    let api = FakeApi::default();
    let service = TransferService::new(&api);
    let request = TransferRequest::new("ACC1000", "ACC1001", dec!(100.50)).unwrap();

    let response = service.transfer(&request).await.unwrap();

    assert_eq!(
        api.transfers.lock().as_slice(),
        &[json!({"fromAccount": "ACC1000", "toAccount": "ACC1001", "amount": 100.5})]
    );
    assert_eq!(response.transaction_id, "TX-42");
    assert_eq!(response.status, "SUCCESS");
    assert_eq!(response.amount, dec!(100.5));
    assert_eq!(response.timestamp, "2025-11-01T10:00:00");
    assert_eq!(response.new_from_balance, Some(dec!(899.5)));
    assert_eq!(response.new_to_balance, None);
}

#[tokio::test]
async fn test_critical_operations_propagate_errors() {
    let api = FakeApi::down();
    let service = TransferService::new(&api);
    let request = TransferRequest::new("ACC1000", "ACC1001", dec!(1)).unwrap();

    assert!(matches!(service.transfer(&request).await, Err(ClientError::Connection(_))));
    assert!(matches!(service.get_balance("ACC1000").await, Err(ClientError::Connection(_))));
    assert!(matches!(service.list_accounts().await, Err(ClientError::Connection(_))));
    assert!(matches!(
        service.get_transaction_history(None, 10).await,
        Err(ClientError::Connection(_))
    ));
}

#[tokio::test]
async fn test_balance_is_typed() {
    let api = FakeApi::default();
    let service = TransferService::new(&api);

    let balance = service.get_balance("ACC1000").await.unwrap();
    assert_eq!(balance.account_number, "ACC1000");
    assert_eq!(balance.balance, dec!(1250.75));
    assert_eq!(balance.currency, "USD");
}

#[tokio::test]
async fn test_list_accounts_skips_entries_without_number() {
    let api = FakeApi {
        accounts: vec![
            json!({"accountNumber": "ACC1000", "balance": 10, "status": "ACTIVE"}),
            json!({"balance": 99}),
            json!({"accountId": "ACC1001"}),
        ],
        ..FakeApi::default()
    };
    let service = TransferService::new(&api);

    let accounts = service.list_accounts().await.unwrap();
    let numbers: Vec<&str> = accounts.iter().map(|a| a.account_number()).collect();
    assert_eq!(numbers, vec!["ACC1000", "ACC1001"]);
    assert_eq!(accounts[0].balance(), Some(dec!(10)));
    assert_eq!(accounts[0].status(), Some("ACTIVE"));
}

#[tokio::test]
async fn test_history_is_typed() {
    let api = FakeApi {
        history: vec![
            json!({"transactionId": "TX-1", "type": "TRANSFER", "amount": 25, "fromAccount": "ACC1000", "toAccount": "ACC1001"}),
            json!({"transactionId": "TX-2", "type": "DEPOSIT", "amount": "5.5", "fromAccount": ""}),
        ],
        ..FakeApi::default()
    };
    let service = TransferService::new(&api);

    let records = service.get_transaction_history(Some("ACC1000"), 10).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind.as_deref(), Some("TRANSFER"));
    assert_eq!(records[1].amount, dec!(5.5));
    assert_eq!(records[1].from_account, None);
}

#[tokio::test]
async fn test_authenticated_transfer_over_http() {
    let transport = ScriptedTransport::new();
    transport
        .respond_json(200, json!({"token": "jwt-value"}))
        .respond_json(200, json!({
            "transactionId": "TX-7",
            "status": "SUCCESS",
            "fromAccount": "ACC1000",
            "toAccount": "ACC1001",
            "amount": 20,
        }));
    let mut client = client_with(&transport, 0);
    let session = client.open().unwrap();
    let service = TransferService::new(&*session);

    assert_eq!(service.authenticate("alice", "any").await.as_deref(), Some("jwt-value"));
    let request = TransferRequest::new("ACC1000", "ACC1001", dec!(20)).unwrap();
    let response = service.transfer(&request).await.unwrap();

    assert_eq!(response.transaction_id, "TX-7");
    let requests = transport.requests();
    assert_eq!(requests[0].query_param("claim"), Some("transfer"));
    assert_eq!(requests[1].header("Authorization"), Some("Bearer jwt-value"));
}
