//! # Transaction History
//!
//! Entries returned by `GET /transactions/history`.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::utils::{decimal_field, text_field};

/// One line of transaction history. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    pub transaction_id: Option<String>,
    /// Server-side transaction type (`TRANSFER`, `DEPOSIT`, ...)
    pub kind: Option<String>,
    pub amount: Decimal,
    pub status: Option<String>,
    pub timestamp: Option<String>,
    pub from_account: Option<String>,
    pub to_account: Option<String>,
}

impl TransactionRecord {
    pub fn from_json(data: &Value) -> Self {
        Self {
            transaction_id: text_field(data, "transactionId"),
            kind: text_field(data, "type"),
            amount: decimal_field(data, "amount").unwrap_or_default(),
            status: text_field(data, "status"),
            timestamp: text_field(data, "timestamp"),
            from_account: text_field(data, "fromAccount").filter(|a| !a.is_empty()),
            to_account: text_field(data, "toAccount").filter(|a| !a.is_empty()),
        }
    }
}
