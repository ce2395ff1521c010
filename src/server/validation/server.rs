//! Validation of server create and update payloads.

use serde_json::{Map, Value};

use crate::server::{
    error::validation::ValidationError,
    model::server::{CreateServerParams, UpdateServerParams},
    validation::{as_object, configuration::validate_configuration, non_empty_string, positive_id},
};

pub const HOSTNAME_MAX_LEN: usize = 255;

/// Validates a create payload.
///
/// `hostname` and `datacenter_id` are required; `configuration` defaults to an
/// empty document when absent.
///
/// # Returns
/// - `Ok(CreateServerParams)` - Normalized create request
/// - `Err(ValidationError::InvalidField)` - Missing or malformed field
/// - `Err(ValidationError::ConfigurationOutOfRange)` - Bounded key outside its range
pub fn validate_create(payload: &Value) -> Result<CreateServerParams, ValidationError> {
    let object = as_object(payload)?;

    let hostname = match object.get("hostname") {
        Some(value) => non_empty_string("hostname", value, HOSTNAME_MAX_LEN)?,
        None => return Err(ValidationError::invalid("hostname", "field required")),
    };

    let datacenter_id = match object.get("datacenter_id") {
        Some(value) => positive_id("datacenter_id", value)?,
        None => return Err(ValidationError::invalid("datacenter_id", "field required")),
    };

    let configuration = match object.get("configuration") {
        Some(value) => validate_configuration(value)?,
        None => Map::new(),
    };

    Ok(CreateServerParams {
        hostname,
        configuration,
        datacenter_id,
    })
}

/// Validates an update payload.
///
/// Every field is optional, but at least one of `hostname`, `configuration` or
/// `datacenter_id` must be present. Unknown keys are ignored; an explicit `null`
/// is rejected rather than read as "absent".
///
/// # Returns
/// - `Ok(UpdateServerParams)` - Normalized, non-empty change-set
/// - `Err(ValidationError::EmptyUpdate)` - No recognized field present
/// - `Err(ValidationError::InvalidField)` / `ConfigurationOutOfRange` - Malformed field
pub fn validate_update(payload: &Value) -> Result<UpdateServerParams, ValidationError> {
    let object = as_object(payload)?;

    let hostname = present("hostname", object)?
        .map(|value| non_empty_string("hostname", value, HOSTNAME_MAX_LEN))
        .transpose()?;

    let configuration = present("configuration", object)?
        .map(validate_configuration)
        .transpose()?;

    let datacenter_id = present("datacenter_id", object)?
        .map(|value| positive_id("datacenter_id", value))
        .transpose()?;

    let params = UpdateServerParams {
        hostname,
        configuration,
        datacenter_id,
    };

    if params.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }

    Ok(params)
}

fn present<'a>(
    field: &str,
    object: &'a Map<String, Value>,
) -> Result<Option<&'a Value>, ValidationError> {
    match object.get(field) {
        Some(Value::Null) => Err(ValidationError::invalid(field, "must not be null")),
        other => Ok(other),
    }
}
