//! Contract types shared between the domain, storage, and REST layers

pub mod error;
pub mod model;

pub use error::{FieldViolation, InventoryError};
pub use model::{
    Customer, CustomerDraft, CustomerKind, CustomerStatus, Equipment, EquipmentDraft,
    EquipmentKind, EquipmentStatus, InventoryStats, Link, LinkDraft, LinkMedium, LinkStatus,
    Site, SiteDraft, SiteKind, SiteStatus,
};
