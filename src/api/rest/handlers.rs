//! HTTP request handlers - thin layer that delegates to the domain service

use super::dto::*;
use super::error::{map_domain_error, Problem};
use crate::contract::{CustomerDraft, EquipmentDraft, LinkDraft, SiteDraft};
use crate::domain::InventoryService;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

// ===== Customer handlers =====

pub async fn create_customer(
    Extension(service): Extension<Arc<InventoryService>>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<CustomerDto>), Problem> {
    let draft = CustomerDraft::try_from(payload).map_err(map_domain_error)?;
    let customer = service
        .create_customer(draft)
        .await
        .map_err(map_domain_error)?;
    Ok((StatusCode::CREATED, Json(customer.into())))
}

pub async fn list_customers(
    Extension(service): Extension<Arc<InventoryService>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<CustomersListResponse>, Problem> {
    let customers = service
        .list_customers(page.skip, page.limit)
        .await
        .map_err(map_domain_error)?;
    let items: Vec<CustomerDto> = customers.into_iter().map(Into::into).collect();
    let total = items.len();
    Ok(Json(CustomersListResponse { items, total }))
}

pub async fn get_customer(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerDto>, Problem> {
    let customer = service.get_customer(id).await.map_err(map_domain_error)?;
    Ok(Json(customer.into()))
}

pub async fn update_customer(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Json<CustomerDto>, Problem> {
    let draft = CustomerDraft::try_from(payload).map_err(map_domain_error)?;
    let customer = service
        .update_customer(id, draft)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(customer.into()))
}

pub async fn delete_customer(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_customer(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Site handlers =====

pub async fn create_site(
    Extension(service): Extension<Arc<InventoryService>>,
    Json(payload): Json<SitePayload>,
) -> Result<(StatusCode, Json<SiteDto>), Problem> {
    let draft = SiteDraft::try_from(payload).map_err(map_domain_error)?;
    let site = service.create_site(draft).await.map_err(map_domain_error)?;
    Ok((StatusCode::CREATED, Json(site.into())))
}

pub async fn list_sites(
    Extension(service): Extension<Arc<InventoryService>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<SitesListResponse>, Problem> {
    let sites = service
        .list_sites(page.skip, page.limit)
        .await
        .map_err(map_domain_error)?;
    let items: Vec<SiteDto> = sites.into_iter().map(Into::into).collect();
    let total = items.len();
    Ok(Json(SitesListResponse { items, total }))
}

pub async fn get_site(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<SiteDto>, Problem> {
    let site = service.get_site(id).await.map_err(map_domain_error)?;
    Ok(Json(site.into()))
}

pub async fn update_site(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
    Json(payload): Json<SitePayload>,
) -> Result<Json<SiteDto>, Problem> {
    let draft = SiteDraft::try_from(payload).map_err(map_domain_error)?;
    let site = service
        .update_site(id, draft)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(site.into()))
}

pub async fn delete_site(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_site(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Link handlers =====

pub async fn create_link(
    Extension(service): Extension<Arc<InventoryService>>,
    Json(payload): Json<LinkPayload>,
) -> Result<(StatusCode, Json<LinkDto>), Problem> {
    let draft = LinkDraft::try_from(payload).map_err(map_domain_error)?;
    let link = service.create_link(draft).await.map_err(map_domain_error)?;
    Ok((StatusCode::CREATED, Json(link.into())))
}

pub async fn list_links(
    Extension(service): Extension<Arc<InventoryService>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<LinksListResponse>, Problem> {
    let links = service
        .list_links(page.skip, page.limit)
        .await
        .map_err(map_domain_error)?;
    let items: Vec<LinkDto> = links.into_iter().map(Into::into).collect();
    let total = items.len();
    Ok(Json(LinksListResponse { items, total }))
}

pub async fn get_link(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<LinkDto>, Problem> {
    let link = service.get_link(id).await.map_err(map_domain_error)?;
    Ok(Json(link.into()))
}

pub async fn update_link(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
    Json(payload): Json<LinkPayload>,
) -> Result<Json<LinkDto>, Problem> {
    let draft = LinkDraft::try_from(payload).map_err(map_domain_error)?;
    let link = service
        .update_link(id, draft)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(link.into()))
}

pub async fn delete_link(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_link(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Equipment handlers =====

pub async fn create_equipment(
    Extension(service): Extension<Arc<InventoryService>>,
    Json(payload): Json<EquipmentPayload>,
) -> Result<(StatusCode, Json<EquipmentDto>), Problem> {
    let draft = EquipmentDraft::try_from(payload).map_err(map_domain_error)?;
    let equipment = service
        .create_equipment(draft)
        .await
        .map_err(map_domain_error)?;
    Ok((StatusCode::CREATED, Json(equipment.into())))
}

pub async fn list_equipment(
    Extension(service): Extension<Arc<InventoryService>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<EquipmentListResponse>, Problem> {
    let equipment = service
        .list_equipment(page.skip, page.limit)
        .await
        .map_err(map_domain_error)?;
    let items: Vec<EquipmentDto> = equipment.into_iter().map(Into::into).collect();
    let total = items.len();
    Ok(Json(EquipmentListResponse { items, total }))
}

pub async fn get_equipment(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<EquipmentDto>, Problem> {
    let equipment = service.get_equipment(id).await.map_err(map_domain_error)?;
    Ok(Json(equipment.into()))
}

pub async fn update_equipment(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
    Json(payload): Json<EquipmentPayload>,
) -> Result<Json<EquipmentDto>, Problem> {
    let draft = EquipmentDraft::try_from(payload).map_err(map_domain_error)?;
    let equipment = service
        .update_equipment(id, draft)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(equipment.into()))
}

pub async fn delete_equipment(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_equipment(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Statistics handler =====

pub async fn get_stats(
    Extension(service): Extension<Arc<InventoryService>>,
) -> Result<Json<StatsDto>, Problem> {
    let stats = service.stats().await.map_err(map_domain_error)?;
    Ok(Json(stats.into()))
}
