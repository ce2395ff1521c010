use serde_json::Value;

use crate::server::{
    error::validation::ValidationError,
    model::datacenter::CreateDatacenterParams,
    validation::{as_object, non_empty_string},
};

pub const NAME_MAX_LEN: usize = 255;

/// Validates a datacenter create payload; `name` is required and non-empty.
pub fn validate_create(payload: &Value) -> Result<CreateDatacenterParams, ValidationError> {
    let object = as_object(payload)?;

    let name = match object.get("name") {
        Some(value) => non_empty_string("name", value, NAME_MAX_LEN)?,
        None => return Err(ValidationError::invalid("name", "field required")),
    };

    Ok(CreateDatacenterParams { name })
}
