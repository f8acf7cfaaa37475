//! Identifier generation for new records

use crate::core::{Record, Store};
use anyhow::{Result, bail};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// How many times a collision with an existing id is redrawn
const MAX_ID_ATTEMPTS: usize = 8;

/// Source of fresh record identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 32-character hex identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Counting identifiers ("1", "2", ...), deterministic for fixtures
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// Draw an id not yet used in `store`
///
/// Uniqueness is scoped to the one collection. Seeded records may already
/// hold ids the generator would produce, so collisions are redrawn.
pub async fn fresh_id<T: Record>(ids: &dyn IdGenerator, store: &dyn Store<T>) -> Result<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ids.next_id();
        if !store.contains(&id).await? {
            return Ok(id);
        }
        tracing::warn!(resource = T::RESOURCE, %id, "generated id already in use, redrawing");
    }
    bail!(
        "could not generate a unique {} id after {} attempts",
        T::RESOURCE,
        MAX_ID_ATTEMPTS
    )
}
