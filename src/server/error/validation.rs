use thiserror::Error;

/// Rejections produced while normalizing an inbound payload.
///
/// Every variant is deterministic for a given input; retrying without changing
/// the payload yields the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A field is missing, has the wrong type, or violates a shape constraint.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Name of the offending field as it appears in the payload
        field: String,
        /// Human-readable description of the problem
        reason: String,
    },

    /// `cpu_cores` or `ram_gb` is not an integer inside its allowed range.
    #[error("configuration.{key} must be an integer between {min} and {max}, got {value}")]
    ConfigurationOutOfRange {
        /// Configuration key that failed the check
        key: String,
        /// The rejected JSON value
        value: serde_json::Value,
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },

    /// An update carried no recognized field.
    #[error("No fields to update")]
    EmptyUpdate,
}

impl ValidationError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
