//! Field-level validation run before any store write
//!
//! Checks collect every offending field into a single structured error, so a
//! caller can fix a bad payload in one pass. Referential checks live in the
//! service; uniqueness lives in the store.

use crate::contract::{
    CustomerDraft, EquipmentDraft, FieldViolation, InventoryError, LinkDraft, SiteDraft,
};

fn require(violations: &mut Vec<FieldViolation>, field: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(FieldViolation::new(field, "must not be empty"));
    }
}

fn finish(violations: Vec<FieldViolation>) -> Result<(), InventoryError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(InventoryError::validation(violations))
    }
}

pub fn check_customer(draft: &CustomerDraft) -> Result<(), InventoryError> {
    let mut violations = Vec::new();
    require(&mut violations, "tax_id", &draft.tax_id);
    require(&mut violations, "name", &draft.name);
    require(&mut violations, "address", &draft.address);
    require(&mut violations, "service_plan", &draft.service_plan);
    finish(violations)
}

pub fn check_site(draft: &SiteDraft) -> Result<(), InventoryError> {
    let mut violations = Vec::new();
    require(&mut violations, "name", &draft.name);
    require(&mut violations, "address", &draft.address);
    if let Some(lat) = draft.latitude {
        if !(-90.0..=90.0).contains(&lat) {
            violations.push(FieldViolation::new(
                "latitude",
                "must be between -90 and 90",
            ));
        }
    }
    if let Some(lon) = draft.longitude {
        if !(-180.0..=180.0).contains(&lon) {
            violations.push(FieldViolation::new(
                "longitude",
                "must be between -180 and 180",
            ));
        }
    }
    finish(violations)
}

pub fn check_link(draft: &LinkDraft) -> Result<(), InventoryError> {
    let mut violations = Vec::new();
    for (field, value) in [
        ("fiber_strands", draft.fiber_strands),
        ("copper_pairs", draft.copper_pairs),
        ("bandwidth_mbps", draft.bandwidth_mbps),
    ] {
        if let Some(v) = value {
            if v <= 0 {
                violations.push(FieldViolation::new(field, "must be positive"));
            }
        }
    }
    finish(violations)
}

pub fn check_equipment(draft: &EquipmentDraft) -> Result<(), InventoryError> {
    let mut violations = Vec::new();
    require(&mut violations, "manufacturer", &draft.manufacturer);
    require(&mut violations, "model", &draft.model);
    require(&mut violations, "serial_number", &draft.serial_number);
    require(&mut violations, "asset_tag", &draft.asset_tag);
    finish(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{CustomerKind, CustomerStatus, SiteKind, SiteStatus};

    fn customer_draft() -> CustomerDraft {
        CustomerDraft {
            tax_id: "85821130368".into(),
            name: "Adria Net d.o.o.".into(),
            address: "Vukovarska 12, Zagreb".into(),
            kind: CustomerKind::Organization,
            service_plan: "business-500".into(),
            status: CustomerStatus::Active,
            admin_contact: None,
            tech_contact: None,
        }
    }

    #[test]
    fn valid_customer_passes() {
        assert!(check_customer(&customer_draft()).is_ok());
    }

    #[test]
    fn empty_required_fields_are_all_reported() {
        let mut draft = customer_draft();
        draft.tax_id = "".into();
        draft.name = "   ".into();
        let err = check_customer(&draft).unwrap_err();
        match err {
            InventoryError::Validation { violations } => {
                let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["tax_id", "name"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let draft = SiteDraft {
            name: "POP Zagreb".into(),
            kind: SiteKind::Service,
            address: "Heinzelova 70".into(),
            latitude: Some(95.0),
            longitude: Some(-200.0),
            status: SiteStatus::Planned,
            customer_id: None,
        };
        let err = check_site(&draft).unwrap_err();
        match err {
            InventoryError::Validation { violations } => assert_eq!(violations.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
