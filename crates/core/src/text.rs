//! Small validation helpers for free-text record fields.

use crate::error::{DomainError, DomainResult};

/// Trim `value` and reject it when nothing is left.
pub fn required(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trim `value` and check it looks like `local@domain.tld`.
pub fn email(field: &str, value: &str) -> DomainResult<String> {
    let address = required(field, value)?;
    let valid = match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !address.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(DomainError::validation(format!("{field} must be a valid email address")));
    }
    Ok(address)
}

/// Trim an optional field; blank becomes `None`.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
