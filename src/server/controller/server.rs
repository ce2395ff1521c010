use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        server::{CreateServerDto, PaginationQuery, ServerDto, UpdateServerDto},
    },
    server::{
        controller::{json_body, path_id, query_params},
        error::AppError,
        service::server::ServerService,
        state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List servers.
///
/// Returns servers ordered by ID. `skip` defaults to 0 and `limit` to 100;
/// larger limits are capped at 1000.
///
/// # Returns
/// - `200 OK` - Window of servers
/// - `400 Bad Request` - Non-integer or negative skip, or non-positive limit
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/servers",
    tag = SERVER_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Window of servers ordered by id", body = Vec<ServerDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = query_params(query)?;

    let servers = ServerService::new(&state.db)
        .get_page(params.skip, params.limit)
        .await?;

    let dtos: Vec<ServerDto> = servers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a server by ID.
///
/// # Returns
/// - `200 OK` - The server
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No server with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Server found", body = ServerDto),
        (status = 400, description = "Malformed server id", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id)?;

    let server = ServerService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// Create a server.
///
/// The datacenter must exist. `configuration` is optional; when present,
/// `cpu_cores` must be 1-128 and `ram_gb` 1-4096.
///
/// # Returns
/// - `201 Created` - The stored server
/// - `400 Bad Request` - Invalid payload, out-of-range configuration or missing datacenter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/servers",
    tag = SERVER_TAG,
    request_body = CreateServerDto,
    responses(
        (status = 201, description = "Server created", body = ServerDto),
        (status = 400, description = "Invalid payload or unknown datacenter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_server(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;

    let server = ServerService::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(server.into_dto())))
}

/// Partially update a server.
///
/// Only the fields present in the body change. `configuration` is merged onto the
/// stored document at its top level. A body with no recognized field is rejected
/// with `empty_update`, whether or not the server exists.
///
/// # Returns
/// - `200 OK` - The server after the update
/// - `400 Bad Request` - Invalid or empty change-set, or missing datacenter
/// - `404 Not Found` - No server with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = i32, Path, description = "Server ID")
    ),
    request_body = UpdateServerDto,
    responses(
        (status = 200, description = "Server updated", body = ServerDto),
        (status = 400, description = "Invalid or empty change-set, or unknown datacenter", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_server(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id)?;
    let payload = json_body(payload)?;

    let server = ServerService::new(&state.db).update(id, &payload).await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// Delete a server and its switch associations.
///
/// # Returns
/// - `204 No Content` - Server deleted
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No server with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = i32, Path, description = "Server ID")
    ),
    responses(
        (status = 204, description = "Server deleted"),
        (status = 400, description = "Malformed server id", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_server(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id)?;

    ServerService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
