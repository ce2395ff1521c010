//! Validation layer.
//!
//! Turns structurally untyped JSON payloads into normalized parameter types. All
//! functions here are pure: they never touch the database and either return the
//! normalized request or a [`ValidationError`] naming the field and reason.
//!
//! [`ValidationError`]: crate::server::error::validation::ValidationError

pub mod configuration;
pub mod datacenter;
pub mod pagination;
pub mod server;

use serde_json::{Map, Value};

use crate::server::error::validation::ValidationError;

/// Requires the payload root to be a JSON object.
pub(crate) fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload
        .as_object()
        .ok_or_else(|| ValidationError::invalid("body", "must be a JSON object"))
}

/// Validates a bounded, non-empty display string such as a hostname or name.
pub(crate) fn non_empty_string(
    field: &str,
    value: &Value,
    max_len: usize,
) -> Result<String, ValidationError> {
    let text = value
        .as_str()
        .ok_or_else(|| ValidationError::invalid(field, "must be a string"))?;

    if text.is_empty() {
        return Err(ValidationError::invalid(field, "must not be empty"));
    }
    if text.chars().count() > max_len {
        return Err(ValidationError::invalid(
            field,
            format!("must be at most {max_len} characters"),
        ));
    }

    Ok(text.to_string())
}

/// Validates a positive integer id that fits the storage column.
pub(crate) fn positive_id(field: &str, value: &Value) -> Result<i32, ValidationError> {
    value
        .as_i64()
        .filter(|id| *id > 0)
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| ValidationError::invalid(field, "must be a positive integer"))
}
