use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::ConnectionTrait;

use crate::{model::api::StatusDto, server::state::AppState};

/// Tag for grouping service status endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Service banner.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = StatusDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    Json(StatusDto {
        status: "ok".to_string(),
        message: "Server Management API".to_string(),
    })
}

/// Liveness check that also pings the database.
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `503 Service Unavailable` - Database ping failed
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service and database are healthy", body = StatusDto),
        (status = 503, description = "Database unreachable", body = StatusDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.execute_unprepared("SELECT 1").await {
        Ok(_) => (
            StatusCode::OK,
            Json(StatusDto {
                status: "ok".to_string(),
                message: "Service is running".to_string(),
            }),
        ),
        Err(err) => {
            tracing::error!("Health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusDto {
                    status: "error".to_string(),
                    message: "Database unreachable".to_string(),
                }),
            )
        }
    }
}
