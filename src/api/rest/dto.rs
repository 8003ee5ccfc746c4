//! REST DTOs with serde derives for the HTTP API
//!
//! Enum-valued fields travel as plain strings so the mapper can report an
//! out-of-enum value as a field-level validation error instead of an opaque
//! deserialization failure.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pagination window; `skip` defaults to 0, `limit` to the configured
/// default and is capped at the configured maximum
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

// ===== Customer DTOs =====

/// Full customer payload, used for both create and update (updates replace
/// every mutable field)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CustomerPayload {
    /// Tax identifier, globally unique
    #[schema(example = "85821130368")]
    pub tax_id: String,
    pub name: String,
    pub address: String,
    /// One of: individual, organization
    #[schema(example = "organization")]
    pub kind: String,
    pub service_plan: String,
    /// One of: active, inactive
    #[schema(example = "active")]
    pub status: String,
    pub admin_contact: Option<String>,
    pub tech_contact: Option<String>,
}

/// Customer response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerDto {
    pub id: i32,
    pub tax_id: String,
    pub name: String,
    pub address: String,
    pub kind: String,
    pub service_plan: String,
    pub status: String,
    pub admin_contact: Option<String>,
    pub tech_contact: Option<String>,
    pub contract_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Paginated list of customers
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomersListResponse {
    pub items: Vec<CustomerDto>,
    pub total: usize,
}

// ===== Site DTOs =====

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SitePayload {
    pub name: String,
    /// One of: customer-premises, service, auxiliary
    #[schema(example = "service")]
    pub kind: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// One of: planned, active, inactive
    #[schema(example = "active")]
    pub status: String,
    /// Owning customer id, if any
    pub customer_id: Option<i32>,
}

/// Site response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SiteDto {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub customer_id: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Paginated list of sites
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SitesListResponse {
    pub items: Vec<SiteDto>,
    pub total: usize,
}

// ===== Link DTOs =====

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LinkPayload {
    pub site_a_id: i32,
    pub site_b_id: i32,
    /// One of: fiber, copper, wireless, point-to-point, point-to-multipoint
    #[schema(example = "fiber")]
    pub medium: String,
    pub fiber_strands: Option<i32>,
    pub copper_pairs: Option<i32>,
    pub bandwidth_mbps: Option<i32>,
    /// One of: active, planned, faulty
    #[schema(example = "planned")]
    pub status: String,
    /// Backup link id; stored, never interpreted
    pub redundant_link_id: Option<i32>,
}

/// Link response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LinkDto {
    pub id: i32,
    pub site_a_id: i32,
    pub site_b_id: i32,
    pub medium: String,
    pub fiber_strands: Option<i32>,
    pub copper_pairs: Option<i32>,
    pub bandwidth_mbps: Option<i32>,
    pub status: String,
    pub redundant_link_id: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Paginated list of links
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LinksListResponse {
    pub items: Vec<LinkDto>,
    pub total: usize,
}

// ===== Equipment DTOs =====

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EquipmentPayload {
    /// Owning site id, required
    pub site_id: i32,
    /// One of: switch, router, optical-network-terminal, antenna, other
    #[schema(example = "router")]
    pub kind: String,
    pub manufacturer: String,
    pub model: String,
    /// Serial number, globally unique
    pub serial_number: String,
    pub asset_tag: String,
    /// One of: in-service, spare, decommissioned
    #[schema(example = "in-service")]
    pub status: String,
    pub installed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Equipment response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentDto {
    pub id: i32,
    pub site_id: i32,
    pub kind: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub status: String,
    pub installed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Paginated list of equipment
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentListResponse {
    pub items: Vec<EquipmentDto>,
    pub total: usize,
}

// ===== Statistics DTO =====

/// Aggregate inventory counts, recomputed on every call
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsDto {
    pub customers: u64,
    pub active_customers: u64,
    pub sites: u64,
    pub active_sites: u64,
    pub links: u64,
    pub equipment: u64,
}
