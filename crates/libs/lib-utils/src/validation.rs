//! # Validation Utilities
//!
//! Input validation helpers.

/// Trimmed view of `value`, or `None` when nothing is left.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
