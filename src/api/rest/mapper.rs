//! Mapper implementations for converting between DTOs and contract models
//!
//! Payload-to-draft conversion is fallible: unknown enum strings become a
//! single `Validation` error naming every offending field and the accepted
//! values, so the caller can fix the payload in one pass.

use super::dto::*;
use crate::contract::{
    self, FieldViolation, InventoryError, InventoryStats,
};

fn parse_wire<T>(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: &str,
    accepted: &'static [&'static str],
) -> Option<T>
where
    T: std::str::FromStr,
{
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            violations.push(FieldViolation::new(
                field,
                format!("'{}' is not one of: {}", value, accepted.join(", ")),
            ));
            None
        }
    }
}

// ===== Customer conversions =====

impl TryFrom<CustomerPayload> for contract::CustomerDraft {
    type Error = InventoryError;

    fn try_from(payload: CustomerPayload) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();
        let kind = parse_wire(
            &mut violations,
            "kind",
            &payload.kind,
            contract::CustomerKind::wire_values(),
        );
        let status = parse_wire(
            &mut violations,
            "status",
            &payload.status,
            contract::CustomerStatus::wire_values(),
        );
        match (kind, status) {
            (Some(kind), Some(status)) => Ok(Self {
                tax_id: payload.tax_id,
                name: payload.name,
                address: payload.address,
                kind,
                service_plan: payload.service_plan,
                status,
                admin_contact: payload.admin_contact,
                tech_contact: payload.tech_contact,
            }),
            _ => Err(InventoryError::validation(violations)),
        }
    }
}

impl From<contract::Customer> for CustomerDto {
    fn from(customer: contract::Customer) -> Self {
        Self {
            id: customer.id,
            tax_id: customer.tax_id,
            name: customer.name,
            address: customer.address,
            kind: customer.kind.as_str().to_owned(),
            service_plan: customer.service_plan,
            status: customer.status.as_str().to_owned(),
            admin_contact: customer.admin_contact,
            tech_contact: customer.tech_contact,
            contract_date: customer.contract_date,
            created_at: customer.created_at,
        }
    }
}

// ===== Site conversions =====

impl TryFrom<SitePayload> for contract::SiteDraft {
    type Error = InventoryError;

    fn try_from(payload: SitePayload) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();
        let kind = parse_wire(
            &mut violations,
            "kind",
            &payload.kind,
            contract::SiteKind::wire_values(),
        );
        let status = parse_wire(
            &mut violations,
            "status",
            &payload.status,
            contract::SiteStatus::wire_values(),
        );
        match (kind, status) {
            (Some(kind), Some(status)) => Ok(Self {
                name: payload.name,
                kind,
                address: payload.address,
                latitude: payload.latitude,
                longitude: payload.longitude,
                status,
                customer_id: payload.customer_id,
            }),
            _ => Err(InventoryError::validation(violations)),
        }
    }
}

impl From<contract::Site> for SiteDto {
    fn from(site: contract::Site) -> Self {
        Self {
            id: site.id,
            name: site.name,
            kind: site.kind.as_str().to_owned(),
            address: site.address,
            latitude: site.latitude,
            longitude: site.longitude,
            status: site.status.as_str().to_owned(),
            customer_id: site.customer_id,
            created_at: site.created_at,
        }
    }
}

// ===== Link conversions =====

impl TryFrom<LinkPayload> for contract::LinkDraft {
    type Error = InventoryError;

    fn try_from(payload: LinkPayload) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();
        let medium = parse_wire(
            &mut violations,
            "medium",
            &payload.medium,
            contract::LinkMedium::wire_values(),
        );
        let status = parse_wire(
            &mut violations,
            "status",
            &payload.status,
            contract::LinkStatus::wire_values(),
        );
        match (medium, status) {
            (Some(medium), Some(status)) => Ok(Self {
                site_a_id: payload.site_a_id,
                site_b_id: payload.site_b_id,
                medium,
                fiber_strands: payload.fiber_strands,
                copper_pairs: payload.copper_pairs,
                bandwidth_mbps: payload.bandwidth_mbps,
                status,
                redundant_link_id: payload.redundant_link_id,
            }),
            _ => Err(InventoryError::validation(violations)),
        }
    }
}

impl From<contract::Link> for LinkDto {
    fn from(link: contract::Link) -> Self {
        Self {
            id: link.id,
            site_a_id: link.site_a_id,
            site_b_id: link.site_b_id,
            medium: link.medium.as_str().to_owned(),
            fiber_strands: link.fiber_strands,
            copper_pairs: link.copper_pairs,
            bandwidth_mbps: link.bandwidth_mbps,
            status: link.status.as_str().to_owned(),
            redundant_link_id: link.redundant_link_id,
            created_at: link.created_at,
        }
    }
}

// ===== Equipment conversions =====

impl TryFrom<EquipmentPayload> for contract::EquipmentDraft {
    type Error = InventoryError;

    fn try_from(payload: EquipmentPayload) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();
        let kind = parse_wire(
            &mut violations,
            "kind",
            &payload.kind,
            contract::EquipmentKind::wire_values(),
        );
        let status = parse_wire(
            &mut violations,
            "status",
            &payload.status,
            contract::EquipmentStatus::wire_values(),
        );
        match (kind, status) {
            (Some(kind), Some(status)) => Ok(Self {
                site_id: payload.site_id,
                kind,
                manufacturer: payload.manufacturer,
                model: payload.model,
                serial_number: payload.serial_number,
                asset_tag: payload.asset_tag,
                status,
                installed_at: payload.installed_at,
            }),
            _ => Err(InventoryError::validation(violations)),
        }
    }
}

impl From<contract::Equipment> for EquipmentDto {
    fn from(equipment: contract::Equipment) -> Self {
        Self {
            id: equipment.id,
            site_id: equipment.site_id,
            kind: equipment.kind.as_str().to_owned(),
            manufacturer: equipment.manufacturer,
            model: equipment.model,
            serial_number: equipment.serial_number,
            asset_tag: equipment.asset_tag,
            status: equipment.status.as_str().to_owned(),
            installed_at: equipment.installed_at,
            created_at: equipment.created_at,
        }
    }
}

// ===== Statistics conversions =====

impl From<InventoryStats> for StatsDto {
    fn from(stats: InventoryStats) -> Self {
        Self {
            customers: stats.customers,
            active_customers: stats.active_customers,
            sites: stats.sites,
            active_sites: stats.active_sites,
            links: stats.links,
            equipment: stats.equipment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_payload() -> CustomerPayload {
        CustomerPayload {
            tax_id: "85821130368".into(),
            name: "Adria Net d.o.o.".into(),
            address: "Vukovarska 12, Zagreb".into(),
            kind: "organization".into(),
            service_plan: "business-500".into(),
            status: "active".into(),
            admin_contact: Some("uprava@adrianet.hr".into()),
            tech_contact: None,
        }
    }

    #[test]
    fn valid_payload_converts() {
        let draft = contract::CustomerDraft::try_from(customer_payload()).unwrap();
        assert_eq!(draft.kind, contract::CustomerKind::Organization);
        assert_eq!(draft.status, contract::CustomerStatus::Active);
    }

    #[test]
    fn unknown_enum_values_name_every_offending_field() {
        let mut payload = customer_payload();
        payload.kind = "household".into();
        payload.status = "ACTIVE".into();
        let err = contract::CustomerDraft::try_from(payload).unwrap_err();
        match err {
            InventoryError::Validation { violations } => {
                let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["kind", "status"]);
                assert!(violations[0].message.contains("individual, organization"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
