//! Database migrations for the inventory schema
//!
//! All foreign keys are ON DELETE RESTRICT: deleting a row that dependents
//! still reference fails instead of cascading or leaving danglers.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250812_000001_create_customers::Migration),
            Box::new(m20250812_000002_create_sites::Migration),
            Box::new(m20250812_000003_create_links::Migration),
            Box::new(m20250812_000004_create_equipment::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // The version record table has a unique key on the migration name, so a
    // collision would make the second `up` insert fail.
    #[test]
    fn migration_names_are_distinct() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_owned())
            .collect();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "{names:?}");
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    TaxId,
    Name,
    Address,
    Kind,
    ServicePlan,
    Status,
    AdminContact,
    TechContact,
    ContractDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sites {
    Table,
    Id,
    Name,
    Kind,
    Address,
    Latitude,
    Longitude,
    Status,
    CustomerId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Links {
    Table,
    Id,
    SiteAId,
    SiteBId,
    Medium,
    FiberStrands,
    CopperPairs,
    BandwidthMbps,
    Status,
    RedundantLinkId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
    SiteId,
    Kind,
    Manufacturer,
    Model,
    SerialNumber,
    AssetTag,
    Status,
    InstalledAt,
    CreatedAt,
}

mod m20250812_000001_create_customers {
    use super::*;

    pub struct Migration;

    // The migrations live in one file, so the file-stem-derived name would
    // collide across modules; each one carries its own.
    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250812_000001_create_customers"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Customers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Customers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Customers::TaxId)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Customers::Name).string().not_null())
                        .col(ColumnDef::new(Customers::Address).string().not_null())
                        .col(ColumnDef::new(Customers::Kind).string().not_null())
                        .col(ColumnDef::new(Customers::ServicePlan).string().not_null())
                        .col(ColumnDef::new(Customers::Status).string().not_null())
                        .col(ColumnDef::new(Customers::AdminContact).string())
                        .col(ColumnDef::new(Customers::TechContact).string())
                        .col(
                            ColumnDef::new(Customers::ContractDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Customers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Customers::Table).to_owned())
                .await
        }
    }
}

mod m20250812_000002_create_sites {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250812_000002_create_sites"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Sites::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Sites::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Sites::Name).string().not_null())
                        .col(ColumnDef::new(Sites::Kind).string().not_null())
                        .col(ColumnDef::new(Sites::Address).string().not_null())
                        .col(ColumnDef::new(Sites::Latitude).double())
                        .col(ColumnDef::new(Sites::Longitude).double())
                        .col(ColumnDef::new(Sites::Status).string().not_null())
                        .col(ColumnDef::new(Sites::CustomerId).integer())
                        .col(
                            ColumnDef::new(Sites::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_sites_customer")
                                .from(Sites::Table, Sites::CustomerId)
                                .to(Customers::Table, Customers::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_sites_customer_id")
                        .table(Sites::Table)
                        .col(Sites::CustomerId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Sites::Table).to_owned())
                .await
        }
    }
}

mod m20250812_000003_create_links {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250812_000003_create_links"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Links::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Links::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Links::SiteAId).integer().not_null())
                        .col(ColumnDef::new(Links::SiteBId).integer().not_null())
                        .col(ColumnDef::new(Links::Medium).string().not_null())
                        .col(ColumnDef::new(Links::FiberStrands).integer())
                        .col(ColumnDef::new(Links::CopperPairs).integer())
                        .col(ColumnDef::new(Links::BandwidthMbps).integer())
                        .col(ColumnDef::new(Links::Status).string().not_null())
                        .col(ColumnDef::new(Links::RedundantLinkId).integer())
                        .col(
                            ColumnDef::new(Links::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_links_site_a")
                                .from(Links::Table, Links::SiteAId)
                                .to(Sites::Table, Sites::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_links_site_b")
                                .from(Links::Table, Links::SiteBId)
                                .to(Sites::Table, Sites::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_links_redundant_link")
                                .from(Links::Table, Links::RedundantLinkId)
                                .to(Links::Table, Links::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_links_site_a_id")
                        .table(Links::Table)
                        .col(Links::SiteAId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_links_site_b_id")
                        .table(Links::Table)
                        .col(Links::SiteBId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Links::Table).to_owned())
                .await
        }
    }
}

mod m20250812_000004_create_equipment {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250812_000004_create_equipment"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Equipment::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Equipment::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Equipment::SiteId).integer().not_null())
                        .col(ColumnDef::new(Equipment::Kind).string().not_null())
                        .col(ColumnDef::new(Equipment::Manufacturer).string().not_null())
                        .col(ColumnDef::new(Equipment::Model).string().not_null())
                        .col(
                            ColumnDef::new(Equipment::SerialNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Equipment::AssetTag).string().not_null())
                        .col(ColumnDef::new(Equipment::Status).string().not_null())
                        .col(ColumnDef::new(Equipment::InstalledAt).timestamp_with_time_zone())
                        .col(
                            ColumnDef::new(Equipment::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_equipment_site")
                                .from(Equipment::Table, Equipment::SiteId)
                                .to(Sites::Table, Sites::Id)
                                .on_delete(ForeignKeyAction::Restrict),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_equipment_site_id")
                        .table(Equipment::Table)
                        .col(Equipment::SiteId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Equipment::Table).to_owned())
                .await
        }
    }
}
