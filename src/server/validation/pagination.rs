use crate::server::{
    error::validation::ValidationError,
    model::pagination::{Pagination, DEFAULT_LIMIT, MAX_LIMIT},
};

/// Validates list window parameters.
///
/// `skip` defaults to 0 and must not be negative. `limit` defaults to 100, must
/// be at least 1, and is clamped to 1000.
pub fn validate_pagination(
    skip: Option<i64>,
    limit: Option<i64>,
) -> Result<Pagination, ValidationError> {
    let skip = match skip {
        Some(value) => u64::try_from(value)
            .map_err(|_| ValidationError::invalid("skip", "must be greater than or equal to 0"))?,
        None => 0,
    };

    let limit = match limit {
        Some(value) if value < 1 => {
            return Err(ValidationError::invalid(
                "limit",
                "must be greater than or equal to 1",
            ))
        }
        Some(value) => (value as u64).min(MAX_LIMIT),
        None => DEFAULT_LIMIT,
    };

    Ok(Pagination { skip, limit })
}
