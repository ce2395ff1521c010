//! Bounds for the two configuration keys that carry meaning.
//!
//! Every other key in a configuration document is opaque and passes through
//! untouched.

use serde_json::{Map, Value};

use crate::server::error::validation::ValidationError;

/// Inclusive integer range enforced on one configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationLimit {
    pub key: &'static str,
    pub min: i64,
    pub max: i64,
}

pub const CPU_CORES: ConfigurationLimit = ConfigurationLimit {
    key: "cpu_cores",
    min: 1,
    max: 128,
};

pub const RAM_GB: ConfigurationLimit = ConfigurationLimit {
    key: "ram_gb",
    min: 1,
    max: 4096,
};

pub const LIMITS: [ConfigurationLimit; 2] = [CPU_CORES, RAM_GB];

impl ConfigurationLimit {
    /// Accepts only JSON integers within `min..=max`; floats, strings, booleans
    /// and `null` are rejected.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        match value.as_i64() {
            Some(n) if (self.min..=self.max).contains(&n) => Ok(()),
            _ => Err(ValidationError::ConfigurationOutOfRange {
                key: self.key.to_string(),
                value: value.clone(),
                min: self.min,
                max: self.max,
            }),
        }
    }
}

/// Checks the bounded keys present at the top level of a configuration fragment.
pub fn check_limits(fragment: &Map<String, Value>) -> Result<(), ValidationError> {
    for limit in LIMITS {
        if let Some(value) = fragment.get(limit.key) {
            limit.check(value)?;
        }
    }

    Ok(())
}

/// Validates a `configuration` payload field: must be an object within limits.
pub fn validate_configuration(value: &Value) -> Result<Map<String, Value>, ValidationError> {
    let fragment = value
        .as_object()
        .ok_or_else(|| ValidationError::invalid("configuration", "must be a JSON object"))?;

    check_limits(fragment)?;

    Ok(fragment.clone())
}
