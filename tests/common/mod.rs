//! Common test utilities: in-memory store setup and draft factories

#![allow(dead_code)]

use netplant::contract::{
    CustomerDraft, CustomerKind, CustomerStatus, EquipmentDraft, EquipmentKind, EquipmentStatus,
    LinkDraft, LinkMedium, LinkStatus, SiteDraft, SiteKind, SiteStatus,
};
use netplant::infra::storage::migrations::Migrator;
use netplant::{build_service, InventoryService, PageLimits};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Fresh service over a migrated in-memory SQLite store.
///
/// The pool is pinned to one connection; every `sqlite::memory:` connection
/// is its own database.
pub async fn service() -> Arc<InventoryService> {
    service_with_limits(PageLimits::default()).await
}

pub async fn service_with_limits(limits: PageLimits) -> Arc<InventoryService> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    Arc::new(build_service(Arc::new(db), limits))
}

pub fn customer_draft(tax_id: &str) -> CustomerDraft {
    CustomerDraft {
        tax_id: tax_id.to_owned(),
        name: "Adria Net d.o.o.".into(),
        address: "Vukovarska 12, Zagreb".into(),
        kind: CustomerKind::Organization,
        service_plan: "business-500".into(),
        status: CustomerStatus::Active,
        admin_contact: Some("uprava@adrianet.hr".into()),
        tech_contact: Some("noc@adrianet.hr".into()),
    }
}

pub fn site_draft(name: &str) -> SiteDraft {
    SiteDraft {
        name: name.to_owned(),
        kind: SiteKind::Service,
        address: "Heinzelova 70, Zagreb".into(),
        latitude: Some(45.8027),
        longitude: Some(16.0091),
        status: SiteStatus::Active,
        customer_id: None,
    }
}

pub fn link_draft(site_a_id: i32, site_b_id: i32) -> LinkDraft {
    LinkDraft {
        site_a_id,
        site_b_id,
        medium: LinkMedium::Fiber,
        fiber_strands: Some(48),
        copper_pairs: None,
        bandwidth_mbps: Some(10_000),
        status: LinkStatus::Active,
        redundant_link_id: None,
    }
}

pub fn equipment_draft(site_id: i32, serial_number: &str) -> EquipmentDraft {
    EquipmentDraft {
        site_id,
        kind: EquipmentKind::Router,
        manufacturer: "MikroTik".into(),
        model: "CCR2216".into(),
        serial_number: serial_number.to_owned(),
        asset_tag: format!("INV-{serial_number}"),
        status: EquipmentStatus::InService,
        installed_at: None,
    }
}
