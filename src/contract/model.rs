//! Contract models for the inventory service
//!
//! These models are transport-agnostic. NO serde derives - the REST DTOs in
//! `api::rest` carry the wire representation.

use chrono::{DateTime, Utc};

/// A billing/service subscriber, individual or organization
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Store-generated identifier
    pub id: i32,
    /// Tax identifier, globally unique
    pub tax_id: String,
    pub name: String,
    pub address: String,
    pub kind: CustomerKind,
    /// Name of the subscribed service plan
    pub service_plan: String,
    pub status: CustomerStatus,
    pub admin_contact: Option<String>,
    pub tech_contact: Option<String>,
    /// Contract signing date; set to creation time on insert
    pub contract_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Mutable Customer fields as submitted by a caller
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDraft {
    pub tax_id: String,
    pub name: String,
    pub address: String,
    pub kind: CustomerKind,
    pub service_plan: String,
    pub status: CustomerStatus,
    pub admin_contact: Option<String>,
    pub tech_contact: Option<String>,
}

/// A physical or logical location: customer premises, operator service
/// point, or auxiliary installation
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: i32,
    pub name: String,
    pub kind: SiteKind,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: SiteStatus,
    /// Owning customer, if any
    pub customer_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteDraft {
    pub name: String,
    pub kind: SiteKind,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: SiteStatus,
    pub customer_id: Option<i32>,
}

/// A connection between two sites
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i32,
    pub site_a_id: i32,
    pub site_b_id: i32,
    pub medium: LinkMedium,
    pub fiber_strands: Option<i32>,
    pub copper_pairs: Option<i32>,
    pub bandwidth_mbps: Option<i32>,
    pub status: LinkStatus,
    /// Backup link pointer; stored, never interpreted
    pub redundant_link_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkDraft {
    pub site_a_id: i32,
    pub site_b_id: i32,
    pub medium: LinkMedium,
    pub fiber_strands: Option<i32>,
    pub copper_pairs: Option<i32>,
    pub bandwidth_mbps: Option<i32>,
    pub status: LinkStatus,
    pub redundant_link_id: Option<i32>,
}

/// A physical device installed at a site
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub id: i32,
    pub site_id: i32,
    pub kind: EquipmentKind,
    pub manufacturer: String,
    pub model: String,
    /// Serial number, globally unique
    pub serial_number: String,
    pub asset_tag: String,
    pub status: EquipmentStatus,
    pub installed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentDraft {
    pub site_id: i32,
    pub kind: EquipmentKind,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub status: EquipmentStatus,
    pub installed_at: Option<DateTime<Utc>>,
}

/// Aggregate counts over the whole store, recomputed on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryStats {
    pub customers: u64,
    pub active_customers: u64,
    pub sites: u64,
    pub active_sites: u64,
    pub links: u64,
    pub equipment: u64,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Wire representation as carried in payloads and stored rows
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// All accepted wire values, for validation messages
            pub fn wire_values() -> &'static [&'static str] {
                &[$($wire),+]
            }
        }

        impl std::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Customer kind
    CustomerKind {
        Individual => "individual",
        Organization => "organization",
    }
}

wire_enum! {
    /// Customer lifecycle status
    CustomerStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

wire_enum! {
    /// Site kind
    SiteKind {
        CustomerPremises => "customer-premises",
        Service => "service",
        Auxiliary => "auxiliary",
    }
}

wire_enum! {
    /// Site lifecycle status
    SiteStatus {
        Planned => "planned",
        Active => "active",
        Inactive => "inactive",
    }
}

wire_enum! {
    /// Physical medium of a link
    LinkMedium {
        Fiber => "fiber",
        Copper => "copper",
        Wireless => "wireless",
        PointToPoint => "point-to-point",
        PointToMultipoint => "point-to-multipoint",
    }
}

wire_enum! {
    /// Link lifecycle status
    LinkStatus {
        Active => "active",
        Planned => "planned",
        Faulty => "faulty",
    }
}

wire_enum! {
    /// Equipment kind
    EquipmentKind {
        Switch => "switch",
        Router => "router",
        OpticalNetworkTerminal => "optical-network-terminal",
        Antenna => "antenna",
        Other => "other",
    }
}

wire_enum! {
    /// Equipment lifecycle status
    EquipmentStatus {
        InService => "in-service",
        Spare => "spare",
        Decommissioned => "decommissioned",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip_for_every_variant() {
        for value in LinkMedium::wire_values() {
            let parsed: LinkMedium = value.parse().unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
        for value in EquipmentStatus::wire_values() {
            let parsed: EquipmentStatus = value.parse().unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
    }

    #[test]
    fn unknown_wire_value_is_rejected() {
        assert!("coax".parse::<LinkMedium>().is_err());
        assert!("ACTIVE".parse::<CustomerStatus>().is_err());
    }
}
