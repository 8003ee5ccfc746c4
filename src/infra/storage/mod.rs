//! Storage infrastructure - SeaORM entities, migrations, and repositories

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

pub use repositories::{
    CustomerRepository, EquipmentRepository, LinkRepository, SeaOrmRepository, SiteRepository,
};
