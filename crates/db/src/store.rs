//! Postgres-backed [`VikingStore`].

use async_trait::async_trait;
use vikings_core::metadata::VikingRecord;
use vikings_core::store::{StoreError, VikingStore};
use vikings_core::types::VikingNumber;

use crate::repositories::VikingRepo;
use crate::DbPool;

/// Name of the unique constraint guarding `vikings.number`.
pub const UNIQUE_NUMBER_CONSTRAINT: &str = "uq_vikings_number";

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// [`VikingStore`] over the `vikings` table.
#[derive(Clone)]
pub struct PgVikingStore {
    pool: DbPool,
}

impl PgVikingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// `true` if `err` is a unique violation of `uq_vikings_number`.
pub fn is_duplicate_number(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(UNIQUE_NUMBER_CONSTRAINT)
        }
        _ => false,
    }
}

#[async_trait]
impl VikingStore for PgVikingStore {
    async fn insert(&self, record: &VikingRecord) -> Result<(), StoreError> {
        match VikingRepo::create(&self.pool, record).await {
            Ok(row) => {
                tracing::debug!(number = row.number, id = row.id, "Viking stored");
                Ok(())
            }
            Err(e) if is_duplicate_number(&e) => Err(StoreError::Duplicate(record.number)),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    async fn exists(&self, number: VikingNumber) -> Result<bool, StoreError> {
        VikingRepo::exists(&self.pool, number)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn remove(&self, number: VikingNumber) -> Result<bool, StoreError> {
        VikingRepo::delete_by_number(&self.pool, number)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}
