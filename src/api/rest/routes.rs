//! Route registration

use super::dto::{
    CustomerDto, CustomerPayload, CustomersListResponse, EquipmentDto, EquipmentListResponse,
    EquipmentPayload, LinkDto, LinkPayload, LinksListResponse, SiteDto, SitePayload,
    SitesListResponse, StatsDto,
};
use super::handlers;
use crate::domain::InventoryService;
use axum::{
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "netplant",
        description = "Network inventory and topology record keeper"
    ),
    components(schemas(
        CustomerPayload,
        CustomerDto,
        CustomersListResponse,
        SitePayload,
        SiteDto,
        SitesListResponse,
        LinkPayload,
        LinkDto,
        LinksListResponse,
        EquipmentPayload,
        EquipmentDto,
        EquipmentListResponse,
        StatsDto,
    ))
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the REST router; the service handle travels as an Extension so the
/// handlers stay thin adapters onto the repository contract
pub fn router(service: Arc<InventoryService>) -> Router {
    Router::new()
        // Customer endpoints
        .route("/customers", post(handlers::create_customer))
        .route("/customers", get(handlers::list_customers))
        .route("/customers/{id}", get(handlers::get_customer))
        .route("/customers/{id}", put(handlers::update_customer))
        .route("/customers/{id}", delete(handlers::delete_customer))
        // Site endpoints
        .route("/sites", post(handlers::create_site))
        .route("/sites", get(handlers::list_sites))
        .route("/sites/{id}", get(handlers::get_site))
        .route("/sites/{id}", put(handlers::update_site))
        .route("/sites/{id}", delete(handlers::delete_site))
        // Link endpoints
        .route("/links", post(handlers::create_link))
        .route("/links", get(handlers::list_links))
        .route("/links/{id}", get(handlers::get_link))
        .route("/links/{id}", put(handlers::update_link))
        .route("/links/{id}", delete(handlers::delete_link))
        // Equipment endpoints
        .route("/equipment", post(handlers::create_equipment))
        .route("/equipment", get(handlers::list_equipment))
        .route("/equipment/{id}", get(handlers::get_equipment))
        .route("/equipment/{id}", put(handlers::update_equipment))
        .route("/equipment/{id}", delete(handlers::delete_equipment))
        // Aggregate statistics
        .route("/stats", get(handlers::get_stats))
        // Schema
        .route("/openapi.json", get(openapi_json))
        .layer(Extension(service))
}
