//! Domain layer - business logic and repository contracts

pub mod repository;
pub mod service;
pub mod validation;

pub use service::{InventoryService, PageLimits};
