//! # Transfers
//!
//! [`TransferRequest`] is validated when built and cannot change afterwards.
//! [`TransferResponse`] is the server's receipt, parsed leniently.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ValidationError;
use crate::utils::{decimal_field, decimal_to_f64, first_text_field, format_money, text_field};

/// Status reported when the server omits one.
pub const UNKNOWN_STATUS: &str = "UNKNOWN";

/// A validated request to move `amount` from one account to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    from_account: String,
    to_account: String,
    amount: Decimal,
}

impl TransferRequest {
    /// Validate and build a transfer request.
    ///
    /// Checks run in order and stop at the first failure: source present,
    /// destination present, accounts differ, amount strictly positive.
    /// Account identifiers are stored trimmed.
    pub fn new(from_account: &str, to_account: &str, amount: Decimal) -> Result<Self, ValidationError> {
        let from_account =
            lib_utils::non_blank(from_account).ok_or(ValidationError::Empty("Source account"))?;
        let to_account =
            lib_utils::non_blank(to_account).ok_or(ValidationError::Empty("Destination account"))?;

        if from_account == to_account {
            return Err(ValidationError::SameAccount);
        }

        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }

        Ok(Self {
            from_account: from_account.to_string(),
            to_account: to_account.to_string(),
            amount,
        })
    }

    pub fn from_account(&self) -> &str {
        &self.from_account
    }

    pub fn to_account(&self) -> &str {
        &self.to_account
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Body for `POST /transfer`. The API takes the amount as a JSON float.
    pub fn to_wire_json(&self) -> Value {
        json!({
            "fromAccount": self.from_account,
            "toAccount": self.to_account,
            "amount": decimal_to_f64(self.amount),
        })
    }
}

impl fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}: {}",
            self.from_account,
            self.to_account,
            format_money(self.amount)
        )
    }
}

/// Receipt returned by `POST /transfer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferResponse {
    pub transaction_id: String,
    pub status: String,
    pub from_account: String,
    pub to_account: String,
    pub amount: Decimal,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_points: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_from_balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_to_balance: Option<Decimal>,
}

impl TransferResponse {
    /// Parse the server receipt.
    ///
    /// Missing identifiers default to empty, a missing status to
    /// [`UNKNOWN_STATUS`], a missing amount to zero. The timestamp falls back to
    /// `issuedAt`, then to the current time.
    pub fn from_json(data: &Value) -> Self {
        let timestamp = first_text_field(data, &["timestamp", "issuedAt"])
            .filter(|ts| !ts.is_empty())
            .unwrap_or_else(|| lib_utils::format_time(lib_utils::now_utc()));

        Self {
            transaction_id: text_field(data, "transactionId").unwrap_or_default(),
            status: text_field(data, "status").unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            from_account: text_field(data, "fromAccount").unwrap_or_default(),
            to_account: text_field(data, "toAccount").unwrap_or_default(),
            amount: decimal_field(data, "amount").unwrap_or_default(),
            timestamp,
            message: text_field(data, "message"),
            bonus_points: text_field(data, "bonusPoints"),
            permission_level: text_field(data, "permissionLevel"),
            new_from_balance: decimal_field(data, "newFromAccountBalance"),
            new_to_balance: decimal_field(data, "newToAccountBalance"),
        }
    }
}
