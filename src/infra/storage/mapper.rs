//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Row -> record is
//! fallible because enum columns are stored as strings and a row written
//! outside this crate could hold anything.

use super::entity;
use crate::contract::{
    Customer, CustomerDraft, Equipment, EquipmentDraft, Link, LinkDraft, Site, SiteDraft,
};
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};

fn parse_column<T>(table: &str, column: &str, value: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
{
    value
        .parse()
        .map_err(|_| anyhow!("{table}.{column} holds unrecognized value '{value}'"))
}

// ===== Customer =====

impl TryFrom<entity::customer::Model> for Customer {
    type Error = anyhow::Error;

    fn try_from(row: entity::customer::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            kind: parse_column("customers", "kind", &row.kind)?,
            status: parse_column("customers", "status", &row.status)?,
            tax_id: row.tax_id,
            name: row.name,
            address: row.address,
            service_plan: row.service_plan,
            admin_contact: row.admin_contact,
            tech_contact: row.tech_contact,
            contract_date: row.contract_date,
            created_at: row.created_at,
        })
    }
}

/// Fresh row from a draft; contract date defaults to creation time
pub fn new_customer_row(draft: &CustomerDraft, now: DateTime<Utc>) -> entity::customer::ActiveModel {
    entity::customer::ActiveModel {
        id: NotSet,
        tax_id: Set(draft.tax_id.clone()),
        name: Set(draft.name.clone()),
        address: Set(draft.address.clone()),
        kind: Set(draft.kind.as_str().to_owned()),
        service_plan: Set(draft.service_plan.clone()),
        status: Set(draft.status.as_str().to_owned()),
        admin_contact: Set(draft.admin_contact.clone()),
        tech_contact: Set(draft.tech_contact.clone()),
        contract_date: Set(now),
        created_at: Set(now),
    }
}

/// Full replacement of the mutable fields; id, creation timestamp, and
/// contract date are carried over from the existing row
pub fn replace_customer_row(
    existing: &entity::customer::Model,
    draft: &CustomerDraft,
) -> entity::customer::ActiveModel {
    entity::customer::ActiveModel {
        id: Set(existing.id),
        tax_id: Set(draft.tax_id.clone()),
        name: Set(draft.name.clone()),
        address: Set(draft.address.clone()),
        kind: Set(draft.kind.as_str().to_owned()),
        service_plan: Set(draft.service_plan.clone()),
        status: Set(draft.status.as_str().to_owned()),
        admin_contact: Set(draft.admin_contact.clone()),
        tech_contact: Set(draft.tech_contact.clone()),
        contract_date: Set(existing.contract_date),
        created_at: Set(existing.created_at),
    }
}

// ===== Site =====

impl TryFrom<entity::site::Model> for Site {
    type Error = anyhow::Error;

    fn try_from(row: entity::site::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            kind: parse_column("sites", "kind", &row.kind)?,
            status: parse_column("sites", "status", &row.status)?,
            name: row.name,
            address: row.address,
            latitude: row.latitude,
            longitude: row.longitude,
            customer_id: row.customer_id,
            created_at: row.created_at,
        })
    }
}

pub fn new_site_row(draft: &SiteDraft, now: DateTime<Utc>) -> entity::site::ActiveModel {
    entity::site::ActiveModel {
        id: NotSet,
        name: Set(draft.name.clone()),
        kind: Set(draft.kind.as_str().to_owned()),
        address: Set(draft.address.clone()),
        latitude: Set(draft.latitude),
        longitude: Set(draft.longitude),
        status: Set(draft.status.as_str().to_owned()),
        customer_id: Set(draft.customer_id),
        created_at: Set(now),
    }
}

pub fn replace_site_row(
    existing: &entity::site::Model,
    draft: &SiteDraft,
) -> entity::site::ActiveModel {
    entity::site::ActiveModel {
        id: Set(existing.id),
        name: Set(draft.name.clone()),
        kind: Set(draft.kind.as_str().to_owned()),
        address: Set(draft.address.clone()),
        latitude: Set(draft.latitude),
        longitude: Set(draft.longitude),
        status: Set(draft.status.as_str().to_owned()),
        customer_id: Set(draft.customer_id),
        created_at: Set(existing.created_at),
    }
}

// ===== Link =====

impl TryFrom<entity::link::Model> for Link {
    type Error = anyhow::Error;

    fn try_from(row: entity::link::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            medium: parse_column("links", "medium", &row.medium)?,
            status: parse_column("links", "status", &row.status)?,
            site_a_id: row.site_a_id,
            site_b_id: row.site_b_id,
            fiber_strands: row.fiber_strands,
            copper_pairs: row.copper_pairs,
            bandwidth_mbps: row.bandwidth_mbps,
            redundant_link_id: row.redundant_link_id,
            created_at: row.created_at,
        })
    }
}

pub fn new_link_row(draft: &LinkDraft, now: DateTime<Utc>) -> entity::link::ActiveModel {
    entity::link::ActiveModel {
        id: NotSet,
        site_a_id: Set(draft.site_a_id),
        site_b_id: Set(draft.site_b_id),
        medium: Set(draft.medium.as_str().to_owned()),
        fiber_strands: Set(draft.fiber_strands),
        copper_pairs: Set(draft.copper_pairs),
        bandwidth_mbps: Set(draft.bandwidth_mbps),
        status: Set(draft.status.as_str().to_owned()),
        redundant_link_id: Set(draft.redundant_link_id),
        created_at: Set(now),
    }
}

pub fn replace_link_row(
    existing: &entity::link::Model,
    draft: &LinkDraft,
) -> entity::link::ActiveModel {
    entity::link::ActiveModel {
        id: Set(existing.id),
        site_a_id: Set(draft.site_a_id),
        site_b_id: Set(draft.site_b_id),
        medium: Set(draft.medium.as_str().to_owned()),
        fiber_strands: Set(draft.fiber_strands),
        copper_pairs: Set(draft.copper_pairs),
        bandwidth_mbps: Set(draft.bandwidth_mbps),
        status: Set(draft.status.as_str().to_owned()),
        redundant_link_id: Set(draft.redundant_link_id),
        created_at: Set(existing.created_at),
    }
}

// ===== Equipment =====

impl TryFrom<entity::equipment::Model> for Equipment {
    type Error = anyhow::Error;

    fn try_from(row: entity::equipment::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            kind: parse_column("equipment", "kind", &row.kind)?,
            status: parse_column("equipment", "status", &row.status)?,
            site_id: row.site_id,
            manufacturer: row.manufacturer,
            model: row.model,
            serial_number: row.serial_number,
            asset_tag: row.asset_tag,
            installed_at: row.installed_at,
            created_at: row.created_at,
        })
    }
}

pub fn new_equipment_row(
    draft: &EquipmentDraft,
    now: DateTime<Utc>,
) -> entity::equipment::ActiveModel {
    entity::equipment::ActiveModel {
        id: NotSet,
        site_id: Set(draft.site_id),
        kind: Set(draft.kind.as_str().to_owned()),
        manufacturer: Set(draft.manufacturer.clone()),
        model: Set(draft.model.clone()),
        serial_number: Set(draft.serial_number.clone()),
        asset_tag: Set(draft.asset_tag.clone()),
        status: Set(draft.status.as_str().to_owned()),
        installed_at: Set(draft.installed_at),
        created_at: Set(now),
    }
}

pub fn replace_equipment_row(
    existing: &entity::equipment::Model,
    draft: &EquipmentDraft,
) -> entity::equipment::ActiveModel {
    entity::equipment::ActiveModel {
        id: Set(existing.id),
        site_id: Set(draft.site_id),
        kind: Set(draft.kind.as_str().to_owned()),
        manufacturer: Set(draft.manufacturer.clone()),
        model: Set(draft.model.clone()),
        serial_number: Set(draft.serial_number.clone()),
        asset_tag: Set(draft.asset_tag.clone()),
        status: Set(draft.status.as_str().to_owned()),
        installed_at: Set(draft.installed_at),
        created_at: Set(existing.created_at),
    }
}
