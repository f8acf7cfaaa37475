//! Initial data for the in-memory stores

use crate::core::Record;
use crate::entities::{Dish, Order};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Dishes and orders loaded at startup
///
/// Read from YAML; a JSON document is accepted as well since YAML is a
/// superset of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

impl SeedData {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("loading seed file {}", path.display()))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let seed: Self = serde_yaml::from_str(yaml)?;
        seed.check_unique_ids()?;
        Ok(seed)
    }

    fn check_unique_ids(&self) -> Result<()> {
        ensure_unique(&self.dishes)?;
        ensure_unique(&self.orders)
    }
}

fn ensure_unique<T: Record>(records: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            bail!("duplicate {} id in seed data: {}", T::RESOURCE, record.id());
        }
    }
    Ok(())
}
