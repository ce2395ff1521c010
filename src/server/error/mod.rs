//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorKind},
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Each variant maps to exactly one
/// [`ErrorKind`] so clients can branch on the failure without parsing messages.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Payload rejected by the validation layer.
    ///
    /// Results in 400 Bad Request; the variant decides the reported kind.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// A referenced parent row does not exist.
    ///
    /// Results in 400 Bad Request rather than 404: the subject resource is fine,
    /// the reference it carries is not.
    #[error("{entity} with id {id} does not exist")]
    ForeignKeyViolation {
        /// Name of the referenced entity
        entity: &'static str,
        /// The missing id
        id: i32,
    },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O failure outside the request path (binding the listener, etc.).
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl AppError {
    /// Classifies the error for clients and retry policies.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationErr(ValidationError::InvalidField { .. }) => {
                ErrorKind::ValidationError
            }
            Self::ValidationErr(ValidationError::ConfigurationOutOfRange { .. }) => {
                ErrorKind::ConfigurationOutOfRange
            }
            Self::ValidationErr(ValidationError::EmptyUpdate) => ErrorKind::EmptyUpdate,
            Self::ForeignKeyViolation { .. } => ErrorKind::ForeignKeyViolation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::DbErr(_) => ErrorKind::StorageFailure,
            Self::ConfigErr(_) | Self::IoErr(_) => ErrorKind::Internal,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and foreign key violations
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - Storage and startup errors, logged with a generic body
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let kind = self.kind();
        match self {
            Self::ValidationErr(_) | Self::ForeignKeyViolation { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    kind,
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { kind, error: msg })).into_response()
            }
            err => InternalServerError { kind, error: err }.into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E> {
    pub kind: ErrorKind,
    pub error: E,
}

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.error);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                kind: self.kind,
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
