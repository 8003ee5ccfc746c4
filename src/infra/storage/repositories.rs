//! SeaORM repository implementation
//!
//! One generic `SeaOrmRepository<E>` implements the domain `Repository`
//! contract for every table that provides the small `InventoryTable` glue:
//! column handles plus draft-to-row and row-to-record conversions. The four
//! entity kinds instantiate it; none of them hand-duplicate the CRUD.

use super::{entity, mapper};
use crate::contract::{
    Customer, CustomerDraft, Equipment, EquipmentDraft, Link, LinkDraft, Site, SiteDraft,
};
use crate::domain::repository::{RepoError, Repository};
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect,
    SqlErr,
};
use std::marker::PhantomData;
use std::sync::Arc;

/// Table-specific glue consumed by the generic repository
pub trait InventoryTable: EntityTrait {
    /// Contract record returned to the domain
    type Record: Send + Sync;
    /// Mutable-field payload accepted from the domain
    type Draft: Send + Sync;
    /// Active model used for writes
    type Row: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send;

    fn id_column() -> Self::Column;
    fn status_column() -> Self::Column;

    /// Parse a stored row into a contract record
    fn record(row: Self::Model) -> anyhow::Result<Self::Record>;

    /// Build a fresh row; `now` becomes the creation timestamp
    fn new_row(draft: &Self::Draft, now: DateTime<Utc>) -> Self::Row;

    /// Build a full replacement row, carrying over generated fields from the
    /// existing one
    fn replacement_row(existing: &Self::Model, draft: &Self::Draft) -> Self::Row;
}

pub struct SeaOrmRepository<E> {
    db: Arc<DatabaseConnection>,
    table: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            table: PhantomData,
        }
    }
}

/// Classify backend failures so the domain can tell a broken constraint from
/// a broken database
fn classify(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::UniqueViolation(detail),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            RepoError::ForeignKeyViolation(detail)
        }
        // A restricted DELETE fails with SQLite extended code 1811, which
        // `sql_err()` leaves unclassified (it only knows the insert/update
        // code 787).
        _ if err.to_string().contains("FOREIGN KEY constraint failed") => {
            RepoError::ForeignKeyViolation(err.to_string())
        }
        _ => RepoError::Backend(err.into()),
    }
}

#[async_trait]
impl<E> Repository<E::Record, E::Draft> for SeaOrmRepository<E>
where
    E: InventoryTable,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<E::Row> + Send + Sync,
{
    async fn insert(&self, draft: &E::Draft) -> Result<E::Record, RepoError> {
        let row = E::new_row(draft, Utc::now());
        let result = E::insert(row).exec(&*self.db).await.map_err(classify)?;
        let stored = E::find_by_id(result.last_insert_id)
            .one(&*self.db)
            .await
            .map_err(classify)?
            .ok_or_else(|| {
                RepoError::Backend(anyhow!(
                    "row {} vanished between insert and read-back",
                    result.last_insert_id
                ))
            })?;
        E::record(stored).map_err(RepoError::Backend)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<E::Record>, RepoError> {
        let row = E::find_by_id(id).one(&*self.db).await.map_err(classify)?;
        row.map(|r| E::record(r).map_err(RepoError::Backend))
            .transpose()
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<E::Record>, RepoError> {
        let rows = E::find()
            .order_by_asc(E::id_column())
            .offset(skip)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(classify)?;
        rows.into_iter()
            .map(|r| E::record(r).map_err(RepoError::Backend))
            .collect()
    }

    async fn replace(&self, id: i32, draft: &E::Draft) -> Result<Option<E::Record>, RepoError> {
        let Some(existing) = E::find_by_id(id).one(&*self.db).await.map_err(classify)? else {
            return Ok(None);
        };
        let row = E::replacement_row(&existing, draft);
        let updated = E::update(row).exec(&*self.db).await.map_err(classify)?;
        E::record(updated).map(Some).map_err(RepoError::Backend)
    }

    async fn remove(&self, id: i32) -> Result<bool, RepoError> {
        let result = E::delete_by_id(id).exec(&*self.db).await.map_err(classify)?;
        Ok(result.rows_affected > 0)
    }

    async fn count_all(&self) -> Result<u64, RepoError> {
        E::find().count(&*self.db).await.map_err(classify)
    }

    async fn count_by_status(&self, status: &str) -> Result<u64, RepoError> {
        E::find()
            .filter(E::status_column().eq(status))
            .count(&*self.db)
            .await
            .map_err(classify)
    }
}

// ===== Glue implementations, one per table =====

impl InventoryTable for entity::customer::Entity {
    type Record = Customer;
    type Draft = CustomerDraft;
    type Row = entity::customer::ActiveModel;

    fn id_column() -> Self::Column {
        entity::customer::Column::Id
    }

    fn status_column() -> Self::Column {
        entity::customer::Column::Status
    }

    fn record(row: Self::Model) -> anyhow::Result<Customer> {
        row.try_into()
    }

    fn new_row(draft: &CustomerDraft, now: DateTime<Utc>) -> Self::Row {
        mapper::new_customer_row(draft, now)
    }

    fn replacement_row(existing: &Self::Model, draft: &CustomerDraft) -> Self::Row {
        mapper::replace_customer_row(existing, draft)
    }
}

impl InventoryTable for entity::site::Entity {
    type Record = Site;
    type Draft = SiteDraft;
    type Row = entity::site::ActiveModel;

    fn id_column() -> Self::Column {
        entity::site::Column::Id
    }

    fn status_column() -> Self::Column {
        entity::site::Column::Status
    }

    fn record(row: Self::Model) -> anyhow::Result<Site> {
        row.try_into()
    }

    fn new_row(draft: &SiteDraft, now: DateTime<Utc>) -> Self::Row {
        mapper::new_site_row(draft, now)
    }

    fn replacement_row(existing: &Self::Model, draft: &SiteDraft) -> Self::Row {
        mapper::replace_site_row(existing, draft)
    }
}

impl InventoryTable for entity::link::Entity {
    type Record = Link;
    type Draft = LinkDraft;
    type Row = entity::link::ActiveModel;

    fn id_column() -> Self::Column {
        entity::link::Column::Id
    }

    fn status_column() -> Self::Column {
        entity::link::Column::Status
    }

    fn record(row: Self::Model) -> anyhow::Result<Link> {
        row.try_into()
    }

    fn new_row(draft: &LinkDraft, now: DateTime<Utc>) -> Self::Row {
        mapper::new_link_row(draft, now)
    }

    fn replacement_row(existing: &Self::Model, draft: &LinkDraft) -> Self::Row {
        mapper::replace_link_row(existing, draft)
    }
}

impl InventoryTable for entity::equipment::Entity {
    type Record = Equipment;
    type Draft = EquipmentDraft;
    type Row = entity::equipment::ActiveModel;

    fn id_column() -> Self::Column {
        entity::equipment::Column::Id
    }

    fn status_column() -> Self::Column {
        entity::equipment::Column::Status
    }

    fn record(row: Self::Model) -> anyhow::Result<Equipment> {
        row.try_into()
    }

    fn new_row(draft: &EquipmentDraft, now: DateTime<Utc>) -> Self::Row {
        mapper::new_equipment_row(draft, now)
    }

    fn replacement_row(existing: &Self::Model, draft: &EquipmentDraft) -> Self::Row {
        mapper::replace_equipment_row(existing, draft)
    }
}

/// Customer table repository
pub type CustomerRepository = SeaOrmRepository<entity::customer::Entity>;
/// Site table repository
pub type SiteRepository = SeaOrmRepository<entity::site::Entity>;
/// Link table repository
pub type LinkRepository = SeaOrmRepository<entity::link::Entity>;
/// Equipment table repository
pub type EquipmentRepository = SeaOrmRepository<entity::equipment::Entity>;

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn restricted_delete_failure_is_a_foreign_key_violation() {
        let err = DbErr::Exec(RuntimeErr::Internal(
            "Execution Error: error returned from database: (code: 1811) \
             FOREIGN KEY constraint failed"
                .into(),
        ));
        assert!(matches!(
            classify(err),
            RepoError::ForeignKeyViolation(_)
        ));
    }

    #[test]
    fn unclassified_failures_stay_backend_errors() {
        let err = DbErr::Exec(RuntimeErr::Internal("database is locked".into()));
        assert!(matches!(classify(err), RepoError::Backend(_)));
    }
}
