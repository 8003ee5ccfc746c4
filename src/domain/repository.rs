//! Repository trait for data access
//!
//! One generic contract, parameterized over the stored record `R` and its
//! draft `D`, instantiated once per entity kind. The SeaORM implementation
//! lives in `infra::storage::repositories`.

use async_trait::async_trait;

/// Storage-level failures, classified so the domain can tell a broken
/// constraint apart from a broken database.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A unique index rejected the write
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A foreign key rejected the write or delete
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// Anything else the backend reported
    #[error("storage backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Uniform persistence contract for one entity kind.
///
/// Repositories hold no cached state; every call re-reads from the store.
#[async_trait]
pub trait Repository<R, D>: Send + Sync
where
    R: Send + Sync,
    D: Send + Sync,
{
    /// Insert a new row, returning the stored record with its generated id
    /// and creation timestamp
    async fn insert(&self, draft: &D) -> Result<R, RepoError>;

    /// Point lookup by id
    async fn find_by_id(&self, id: i32) -> Result<Option<R>, RepoError>;

    /// Insertion-ordered window over all rows
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<R>, RepoError>;

    /// Full-record replace of every mutable field; `None` if the id is absent
    async fn replace(&self, id: i32, draft: &D) -> Result<Option<R>, RepoError>;

    /// Delete by id; `false` if the id is absent. No cascade.
    async fn remove(&self, id: i32) -> Result<bool, RepoError>;

    /// Total row count
    async fn count_all(&self) -> Result<u64, RepoError>;

    /// Row count filtered by lifecycle status wire value
    async fn count_by_status(&self, status: &str) -> Result<u64, RepoError>;

    /// Existence check used for referential pre-validation
    async fn exists(&self, id: i32) -> Result<bool, RepoError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
