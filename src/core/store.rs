//! Store trait for resource collections

use crate::core::entity::Record;
use anyhow::Result;
use async_trait::async_trait;

/// Ordered collection of records for one resource
///
/// Implementations keep insertion order and look records up by exact id
/// match. Handlers and validators only ever see a store through this trait,
/// so tests can substitute their own fixtures.
#[async_trait]
pub trait Store<T: Record>: Send + Sync {
    /// List all records in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Find a record by id
    async fn find(&self, id: &str) -> Result<Option<T>>;

    /// Position of the record with this id, if any
    async fn position(&self, id: &str) -> Result<Option<usize>>;

    /// Append a record at the end of the collection
    async fn append(&self, record: T) -> Result<T>;

    /// Overwrite the record sharing `record`'s id, keeping its position
    ///
    /// Returns `None` when no such record exists.
    async fn replace(&self, record: T) -> Result<Option<T>>;

    /// Remove the record at `index`, shifting later records down
    async fn remove_at(&self, index: usize) -> Result<Option<T>>;

    /// Number of records
    async fn len(&self) -> Result<usize>;

    /// Check whether a record with this id exists
    async fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.position(id).await?.is_some())
    }
}
