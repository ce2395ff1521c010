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
        datacenter::{CreateDatacenterDto, DatacenterDto},
        server::PaginationQuery,
    },
    server::{
        controller::{json_body, path_id, query_params},
        error::AppError,
        service::datacenter::DatacenterService,
        state::AppState,
    },
};

/// Tag for grouping datacenter endpoints in OpenAPI documentation
pub static DATACENTER_TAG: &str = "datacenter";

/// List datacenters ordered by ID.
#[utoipa::path(
    get,
    path = "/datacenters",
    tag = DATACENTER_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Window of datacenters ordered by id", body = Vec<DatacenterDto>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_datacenters(
    State(state): State<AppState>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = query_params(query)?;

    let datacenters = DatacenterService::new(&state.db)
        .get_page(params.skip, params.limit)
        .await?;

    let dtos: Vec<DatacenterDto> = datacenters.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a datacenter by ID.
#[utoipa::path(
    get,
    path = "/datacenters/{id}",
    tag = DATACENTER_TAG,
    params(
        ("id" = i32, Path, description = "Datacenter ID")
    ),
    responses(
        (status = 200, description = "Datacenter found", body = DatacenterDto),
        (status = 400, description = "Malformed datacenter id", body = ErrorDto),
        (status = 404, description = "Datacenter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_datacenter(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id)?;

    let datacenter = DatacenterService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(datacenter.into_dto())))
}

/// Create a datacenter.
#[utoipa::path(
    post,
    path = "/datacenters",
    tag = DATACENTER_TAG,
    request_body = CreateDatacenterDto,
    responses(
        (status = 201, description = "Datacenter created", body = DatacenterDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_datacenter(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;

    let datacenter = DatacenterService::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(datacenter.into_dto())))
}
