//! In-memory implementation of Store

use crate::core::{Record, Store};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory record store
///
/// Records live in a `Vec` so insertion order is the listing order. Uses
/// RwLock for thread-safe access; clones share the same collection.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Create a store pre-populated with `records`, in order
    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Store<T> for InMemoryStore<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn position(&self, id: &str) -> Result<Option<usize>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.iter().position(|record| record.id() == id))
    }

    async fn append(&self, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.push(record.clone());

        Ok(record)
    }

    async fn replace(&self, record: T) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) else {
            return Ok(None);
        };
        *slot = record.clone();

        Ok(Some(record))
    }

    async fn remove_at(&self, index: usize) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if index >= records.len() {
            return Ok(None);
        }

        Ok(Some(records.remove(index)))
    }

    async fn len(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.len())
    }
}
