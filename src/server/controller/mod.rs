//! HTTP request handlers.
//!
//! Handlers extract path, query and body, call into the service layer and convert
//! domain models to DTOs. Request bodies are taken as raw JSON so the validation
//! layer sees exactly what the client sent, including explicit `null`s and keys
//! it does not recognize.

pub mod datacenter;
pub mod health;
pub mod server;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};
use serde_json::Value;

use crate::server::error::{validation::ValidationError, AppError};

/// Unwraps a JSON body, reporting malformed input as a validation failure.
pub(crate) fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ValidationError::invalid("body", rejection.body_text()).into()),
    }
}

/// Unwraps a numeric `{id}` path segment, reporting a malformed id as a validation failure.
pub(crate) fn path_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => Err(ValidationError::invalid("id", rejection.body_text()).into()),
    }
}

/// Unwraps query parameters, reporting undecodable values as a validation failure.
pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => Err(ValidationError::invalid("query", rejection.body_text()).into()),
    }
}
