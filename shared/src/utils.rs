//! # Shared Utility Functions
//!
//! Readers for loosely-typed JSON objects returned by the banking API, and
//! money formatting for display.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

/// Interpret a JSON value as a decimal amount.
///
/// Accepts integers, floats (via their shortest decimal representation, so
/// `100.1` stays `100.1` rather than the binary expansion) and numeric strings.
/// Anything else, including `null`, yields `None`.
pub fn decimal_from_json(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(Decimal::from(i));
            }
            if let Some(u) = n.as_u64() {
                return Some(Decimal::from(u));
            }
            parse_decimal(&n.to_string())
        }
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(repr: &str) -> Option<Decimal> {
    Decimal::from_str(repr)
        .or_else(|_| Decimal::from_scientific(repr))
        .ok()
}

/// Decimal amount for the wire. The API expects a JSON float.
pub fn decimal_to_f64(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// Read `key` from a JSON object as text.
///
/// Strings are returned as-is; other scalars are rendered (`42`, `true`).
/// Missing keys and `null` yield `None`.
pub fn text_field(data: &Value, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// First present text field among `keys`.
pub fn first_text_field(data: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text_field(data, key))
}

/// Read `key` from a JSON object as a decimal amount.
pub fn decimal_field(data: &Value, key: &str) -> Option<Decimal> {
    data.get(key).and_then(decimal_from_json)
}

/// Format an amount as dollars with two decimals.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use shared::utils::format_money;
///
/// assert_eq!(format_money(Decimal::new(2505, 1)), "$250.50");
/// ```
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}
