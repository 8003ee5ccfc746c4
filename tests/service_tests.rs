//! Integration tests for the inventory service over a real SQLite store

mod common;

use common::*;
use netplant::contract::{CustomerStatus, InventoryError, SiteStatus};

#[tokio::test]
async fn creating_customers_yields_distinct_retrievable_records() {
    let service = service().await;

    let mut ids = Vec::new();
    for tax_id in ["11111111111", "22222222222", "33333333333"] {
        let created = service.create_customer(customer_draft(tax_id)).await.unwrap();
        ids.push(created.id);
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3, "generated ids must be distinct");

    for id in ids {
        let fetched = service.get_customer(id).await.unwrap();
        assert_eq!(fetched.id, id);
    }
}

#[tokio::test]
async fn created_record_round_trips_field_for_field() {
    let service = service().await;
    let draft = customer_draft("85821130368");

    let created = service.create_customer(draft.clone()).await.unwrap();
    let fetched = service.get_customer(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.tax_id, draft.tax_id);
    assert_eq!(fetched.name, draft.name);
    assert_eq!(fetched.address, draft.address);
    assert_eq!(fetched.kind, draft.kind);
    assert_eq!(fetched.service_plan, draft.service_plan);
    assert_eq!(fetched.status, draft.status);
    assert_eq!(fetched.admin_contact, draft.admin_contact);
    assert_eq!(fetched.tech_contact, draft.tech_contact);
    assert_eq!(fetched.contract_date, fetched.created_at);
}

#[tokio::test]
async fn duplicate_tax_id_is_rejected_without_altering_the_store() {
    let service = service().await;
    service.create_customer(customer_draft("11111111111")).await.unwrap();

    let err = service
        .create_customer(customer_draft("11111111111"))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.customers, 1);
}

#[tokio::test]
async fn site_with_missing_owner_fails_and_without_owner_succeeds() {
    let service = service().await;

    let mut owned = site_draft("POP Zagreb");
    owned.customer_id = Some(4242);
    let err = service.create_site(owned).await.unwrap_err();
    assert!(matches!(err, InventoryError::Constraint { .. }), "got {err:?}");

    let unowned = service.create_site(site_draft("POP Zagreb")).await.unwrap();
    assert_eq!(unowned.customer_id, None);
}

#[tokio::test]
async fn site_owned_by_existing_customer_keeps_the_reference() {
    let service = service().await;
    let customer = service.create_customer(customer_draft("11111111111")).await.unwrap();

    let mut draft = site_draft("Adria Net HQ");
    draft.customer_id = Some(customer.id);
    let site = service.create_site(draft).await.unwrap();

    assert_eq!(site.customer_id, Some(customer.id));
}

#[tokio::test]
async fn updating_missing_ids_fails_with_not_found_and_leaves_store_unchanged() {
    let service = service().await;
    let site = service.create_site(site_draft("POP Zagreb")).await.unwrap();

    let err = service
        .update_customer(999, customer_draft("11111111111"))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::NotFound { .. }), "got {err:?}");

    let err = service.update_site(999, site_draft("Ghost")).await.unwrap_err();
    assert!(matches!(err, InventoryError::NotFound { .. }), "got {err:?}");

    let err = service
        .update_link(999, link_draft(site.id, site.id))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::NotFound { .. }), "got {err:?}");

    let err = service
        .update_equipment(999, equipment_draft(site.id, "SN-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::NotFound { .. }), "got {err:?}");

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.customers, 0);
    assert_eq!(stats.sites, 1);
    assert_eq!(stats.links, 0);
    assert_eq!(stats.equipment, 0);
}

#[tokio::test]
async fn update_replaces_every_mutable_field_and_preserves_generated_ones() {
    let service = service().await;
    let created = service.create_customer(customer_draft("11111111111")).await.unwrap();

    let mut replacement = customer_draft("99999999999");
    replacement.name = "Adria Net 2 d.o.o.".into();
    replacement.status = CustomerStatus::Inactive;
    replacement.tech_contact = None;
    let updated = service
        .update_customer(created.id, replacement.clone())
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.tax_id, replacement.tax_id);
    assert_eq!(updated.name, replacement.name);
    assert_eq!(updated.status, CustomerStatus::Inactive);
    assert_eq!(updated.tech_contact, None);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.contract_date, created.contract_date);
}

#[tokio::test]
async fn deleted_record_is_gone_on_the_next_get() {
    let service = service().await;
    let customer = service.create_customer(customer_draft("11111111111")).await.unwrap();

    service.delete_customer(customer.id).await.unwrap();

    let err = service.get_customer(customer.id).await.unwrap_err();
    assert!(matches!(err, InventoryError::NotFound { .. }), "got {err:?}");

    let err = service.delete_customer(customer.id).await.unwrap_err();
    assert!(matches!(err, InventoryError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn stats_report_totals_and_active_counts() {
    let service = service().await;

    for (tax_id, status) in [
        ("11111111111", CustomerStatus::Active),
        ("22222222222", CustomerStatus::Active),
        ("33333333333", CustomerStatus::Inactive),
    ] {
        let mut draft = customer_draft(tax_id);
        draft.status = status;
        service.create_customer(draft).await.unwrap();
    }
    for name in ["POP Zagreb", "POP Split"] {
        let mut draft = site_draft(name);
        draft.status = SiteStatus::Active;
        service.create_site(draft).await.unwrap();
    }

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.customers, 3);
    assert_eq!(stats.active_customers, 2);
    assert_eq!(stats.sites, 2);
    assert_eq!(stats.active_sites, 2);
    assert_eq!(stats.links, 0);
    assert_eq!(stats.equipment, 0);
}

#[tokio::test]
async fn equipment_pagination_windows_are_ordered_and_disjoint() {
    let service = service().await;
    let site = service.create_site(site_draft("Depot")).await.unwrap();

    for n in 0..150 {
        service
            .create_equipment(equipment_draft(site.id, &format!("SN-{n:03}")))
            .await
            .unwrap();
    }

    let first = service.list_equipment(Some(0), Some(100)).await.unwrap();
    let second = service.list_equipment(Some(100), Some(100)).await.unwrap();

    assert_eq!(first.len(), 100);
    assert_eq!(second.len(), 50);

    let mut all_ids: Vec<i32> = first.iter().chain(second.iter()).map(|e| e.id).collect();
    assert!(all_ids.windows(2).all(|w| w[0] < w[1]), "insertion order");
    all_ids.dedup();
    assert_eq!(all_ids.len(), 150, "windows must be disjoint");
}

#[tokio::test]
async fn list_limit_is_defaulted_and_capped() {
    let service = service_with_limits(netplant::PageLimits {
        default_limit: 2,
        max_limit: 3,
    })
    .await;

    for tax_id in ["1", "2", "3", "4", "5"] {
        service.create_customer(customer_draft(tax_id)).await.unwrap();
    }

    let defaulted = service.list_customers(None, None).await.unwrap();
    assert_eq!(defaulted.len(), 2);

    let capped = service.list_customers(None, Some(50)).await.unwrap();
    assert_eq!(capped.len(), 3);
}

#[tokio::test]
async fn racing_duplicate_creates_let_exactly_one_through() {
    let service = service().await;

    let (first, second) = tokio::join!(
        service.create_customer(customer_draft("11111111111")),
        service.create_customer(customer_draft("11111111111"))
    );

    let results = [first, second];
    assert_eq!(
        results.iter().filter(|r| r.is_ok()).count(),
        1,
        "exactly one create may win: {results:?}"
    );
    let loser = results.iter().find(|r| r.is_err()).unwrap().as_ref().unwrap_err();
    assert!(matches!(loser, InventoryError::Constraint { .. }), "got {loser:?}");

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.customers, 1);
}

#[tokio::test]
async fn validation_failures_never_reach_the_store() {
    let service = service().await;

    let mut draft = customer_draft("11111111111");
    draft.name = "".into();
    let err = service.create_customer(draft).await.unwrap_err();
    assert!(matches!(err, InventoryError::Validation { .. }), "got {err:?}");

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.customers, 0);
}
