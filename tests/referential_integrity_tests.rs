//! Referential-integrity and constraint behavior over a real SQLite store
//!
//! Deletes are restrict-if-referenced: a row still referenced by a dependent
//! cannot be removed, so the store never holds dangling references.

mod common;

use common::*;
use netplant::contract::InventoryError;

#[tokio::test]
async fn deleting_a_customer_with_sites_is_restricted() {
    let service = service().await;
    let customer = service.create_customer(customer_draft("11111111111")).await.unwrap();
    let mut draft = site_draft("Adria Net HQ");
    draft.customer_id = Some(customer.id);
    let site = service.create_site(draft).await.unwrap();

    let err = service.delete_customer(customer.id).await.unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    // Detach the site, then the delete goes through
    service.delete_site(site.id).await.unwrap();
    service.delete_customer(customer.id).await.unwrap();
}

#[tokio::test]
async fn deleting_a_site_with_links_or_equipment_is_restricted() {
    let service = service().await;
    let site_a = service.create_site(site_draft("POP Zagreb")).await.unwrap();
    let site_b = service.create_site(site_draft("POP Split")).await.unwrap();
    let link = service.create_link(link_draft(site_a.id, site_b.id)).await.unwrap();
    let device = service
        .create_equipment(equipment_draft(site_a.id, "SN-100"))
        .await
        .unwrap();

    for site_id in [site_a.id, site_b.id] {
        let err = service.delete_site(site_id).await.unwrap_err();
        assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");
    }

    service.delete_link(link.id).await.unwrap();
    service.delete_equipment(device.id).await.unwrap();
    service.delete_site(site_a.id).await.unwrap();
    service.delete_site(site_b.id).await.unwrap();
}

#[tokio::test]
async fn deleting_a_link_referenced_as_redundant_is_restricted() {
    let service = service().await;
    let site_a = service.create_site(site_draft("POP Zagreb")).await.unwrap();
    let site_b = service.create_site(site_draft("POP Split")).await.unwrap();

    let primary = service.create_link(link_draft(site_a.id, site_b.id)).await.unwrap();
    let mut backup = link_draft(site_a.id, site_b.id);
    backup.redundant_link_id = Some(primary.id);
    let backup = service.create_link(backup).await.unwrap();

    let err = service.delete_link(primary.id).await.unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    service.delete_link(backup.id).await.unwrap();
    service.delete_link(primary.id).await.unwrap();
}

#[tokio::test]
async fn link_endpoints_and_redundant_pointer_must_resolve() {
    let service = service().await;
    let site = service.create_site(site_draft("POP Zagreb")).await.unwrap();

    let err = service.create_link(link_draft(site.id, 404)).await.unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    let mut draft = link_draft(site.id, site.id);
    draft.redundant_link_id = Some(404);
    let err = service.create_link(draft).await.unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.links, 0);
}

#[tokio::test]
async fn equipment_requires_an_existing_site_and_a_fresh_serial() {
    let service = service().await;
    let site = service.create_site(site_draft("POP Zagreb")).await.unwrap();

    let err = service
        .create_equipment(equipment_draft(404, "SN-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    service
        .create_equipment(equipment_draft(site.id, "SN-1"))
        .await
        .unwrap();
    let err = service
        .create_equipment(equipment_draft(site.id, "SN-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.equipment, 1);
}

#[tokio::test]
async fn update_cannot_point_at_a_missing_row() {
    let service = service().await;
    let site = service.create_site(site_draft("POP Zagreb")).await.unwrap();

    let mut draft = site_draft("POP Zagreb");
    draft.customer_id = Some(404);
    let err = service.update_site(site.id, draft).await.unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    // The stored row is untouched
    let fetched = service.get_site(site.id).await.unwrap();
    assert_eq!(fetched.customer_id, None);
}

#[tokio::test]
async fn update_cannot_steal_a_unique_field() {
    let service = service().await;
    let first = service.create_customer(customer_draft("11111111111")).await.unwrap();
    service.create_customer(customer_draft("22222222222")).await.unwrap();

    let err = service
        .update_customer(first.id, customer_draft("22222222222"))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    let fetched = service.get_customer(first.id).await.unwrap();
    assert_eq!(fetched.tax_id, "11111111111");
}
