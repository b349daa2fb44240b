//! Persistence collaborator seam.
//!
//! The generation pipeline stores each record through [`VikingStore`] so it
//! can run against Postgres in production and [`MemoryVikingStore`] in tests
//! and dry runs.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::metadata::VikingRecord;
use crate::types::VikingNumber;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record with this number already exists.
    #[error("viking {0} already exists")]
    Duplicate(VikingNumber),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Write-once storage keyed by Viking number.
#[async_trait]
pub trait VikingStore: Send + Sync {
    /// Insert a new record. Fails with [`StoreError::Duplicate`] if the
    /// number is already taken.
    async fn insert(&self, record: &VikingRecord) -> Result<(), StoreError>;

    async fn exists(&self, number: VikingNumber) -> Result<bool, StoreError>;

    /// Delete a record. Returns `true` if one was removed.
    async fn remove(&self, number: VikingNumber) -> Result<bool, StoreError>;
}

/// In-process store backed by a `BTreeMap`.
#[derive(Debug, Default)]
pub struct MemoryVikingStore {
    records: Mutex<BTreeMap<VikingNumber, VikingRecord>>,
}

impl MemoryVikingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, number: VikingNumber) -> Option<VikingRecord> {
        self.lock().get(&number).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<VikingNumber, VikingRecord>> {
        // A poisoned map still holds consistent records; keep serving them.
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl VikingStore for MemoryVikingStore {
    async fn insert(&self, record: &VikingRecord) -> Result<(), StoreError> {
        let mut records = self.lock();
        if records.contains_key(&record.number) {
            return Err(StoreError::Duplicate(record.number));
        }
        records.insert(record.number, record.clone());
        Ok(())
    }

    async fn exists(&self, number: VikingNumber) -> Result<bool, StoreError> {
        Ok(self.lock().contains_key(&number))
    }

    async fn remove(&self, number: VikingNumber) -> Result<bool, StoreError> {
        Ok(self.lock().remove(&number).is_some())
    }
}
