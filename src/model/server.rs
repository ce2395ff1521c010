use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct ServerDto {
    pub id: i32,
    pub hostname: String,
    /// Free-form configuration; `cpu_cores` (1-128) and `ram_gb` (1-4096) are validated.
    #[schema(value_type = Object)]
    pub configuration: serde_json::Value,
    pub datacenter_id: i32,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Request body for creating a server.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CreateServerDto {
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub configuration: Option<serde_json::Value>,
    pub datacenter_id: i32,
}

/// Request body for a partial server update; omitted fields are left untouched.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
pub struct UpdateServerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub configuration: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter_id: Option<i32>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Number of records to skip (default 0)
    pub skip: Option<i64>,
    /// Maximum number of records to return (default 100, capped at 1000)
    pub limit: Option<i64>,
}
