//! # Accounts
//!
//! Account identity and balance snapshots as reported by the banking API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::utils::{decimal_field, first_text_field, text_field};

pub const DEFAULT_CURRENCY: &str = "USD";

/// A bank account, as listed by `GET /accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    account_number: String,
    balance: Option<Decimal>,
    status: Option<String>,
}

impl Account {
    /// Build an account; the number must not be blank.
    pub fn new(
        account_number: &str,
        balance: Option<Decimal>,
        status: Option<String>,
    ) -> Result<Self, ValidationError> {
        let account_number =
            lib_utils::non_blank(account_number).ok_or(ValidationError::Empty("Account number"))?;

        Ok(Self {
            account_number: account_number.to_string(),
            balance,
            status,
        })
    }

    /// Parse a server account object (`accountNumber` or `accountId`, `balance`, `status`).
    pub fn from_json(data: &Value) -> Result<Self, ValidationError> {
        let number = first_text_field(data, &["accountNumber", "accountId"]).unwrap_or_default();
        Self::new(&number, decimal_field(data, "balance"), text_field(data, "status"))
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Option<Decimal> {
        self.balance
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

/// Balance snapshot from `GET /accounts/balance/{account}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account_number: String,
    pub balance: Decimal,
    pub currency: String,
    /// When the client read the balance; the API does not report one.
    pub last_updated: DateTime<Utc>,
}

impl AccountBalance {
    /// Parse a server balance object.
    ///
    /// The server identifies the account as `accountId`; `accountNumber` is
    /// accepted too. Missing balance reads as zero, missing currency as USD.
    pub fn from_json(data: &Value) -> Self {
        Self {
            account_number: first_text_field(data, &["accountNumber", "accountId"]).unwrap_or_default(),
            balance: decimal_field(data, "balance").unwrap_or_default(),
            currency: text_field(data, "currency").unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            last_updated: lib_utils::now_utc(),
        }
    }
}
