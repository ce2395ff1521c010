//! Route table and API documentation.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{datacenter, health, server},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Server Management API",
        description = "Inventory of servers, the datacenters hosting them and their switch wiring"
    ),
    tags(
        (name = "server", description = "Server inventory"),
        (name = "datacenter", description = "Datacenters referenced by servers"),
        (name = "health", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Collects every documented route along with its OpenAPI description.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::root))
        .routes(routes!(health::health))
        .routes(routes!(server::get_servers, server::create_server))
        .routes(routes!(
            server::get_server,
            server::update_server,
            server::delete_server
        ))
        .routes(routes!(
            datacenter::get_datacenters,
            datacenter::create_datacenter
        ))
        .routes(routes!(datacenter::get_datacenter))
        .split_for_parts()
}

/// Builds the application router with Swagger UI at `/api/docs`.
pub fn build_router(state: AppState) -> Router {
    let (routes, api) = router();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
