//! netplant - network inventory and topology record keeper
//!
//! Tracks customers, sites, the links connecting sites, and the equipment
//! installed at sites, behind a uniform CRUD surface per entity kind plus an
//! aggregate-statistics view. The store enforces uniqueness and referential
//! integrity; everything above it is validation and thin adapters.

// Public exports
pub mod contract;
pub use contract::{FieldViolation, InventoryError};

pub mod domain;
pub use domain::{InventoryService, PageLimits};

pub mod api;
pub mod config;
pub mod infra;

use infra::storage::{
    CustomerRepository, EquipmentRepository, LinkRepository, SiteRepository,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Wire the four repositories over one injected store handle
pub fn build_service(db: Arc<DatabaseConnection>, limits: PageLimits) -> InventoryService {
    InventoryService::new(
        Arc::new(CustomerRepository::new(db.clone())),
        Arc::new(SiteRepository::new(db.clone())),
        Arc::new(LinkRepository::new(db.clone())),
        Arc::new(EquipmentRepository::new(db)),
        limits,
    )
}
