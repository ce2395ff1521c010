use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable classification of a failed request.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ValidationError,
    ConfigurationOutOfRange,
    EmptyUpdate,
    ForeignKeyViolation,
    NotFound,
    StorageFailure,
    Internal,
}

impl ErrorKind {
    /// Whether a caller may retry the same request unchanged.
    ///
    /// Only storage failures are potentially transient; every other kind is
    /// deterministic for a given input.
    pub fn is_retriable(self) -> bool {
        matches!(self, Self::StorageFailure)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub kind: ErrorKind,
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct StatusDto {
    pub status: String,
    pub message: String,
}
