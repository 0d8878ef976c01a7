//! In-memory implementation of PuppyService for testing and development

use crate::core::error::{PuppyError, PuppyResult};
use crate::core::puppy::{NewPuppy, Puppy, PuppyChanges};
use crate::core::service::PuppyService;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// In-memory puppy store
///
/// Behaves like the `puppies` table: ids come from a sequence that is never
/// reused, and the same column constraints are enforced on every write.
/// Uses RwLock for thread-safe access; clones share the same table.
#[derive(Clone, Default)]
pub struct InMemoryPuppyService {
    table: Arc<RwLock<Table>>,
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Puppy>,
    last_id: i32,
}

impl InMemoryPuppyService {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> PuppyError {
    PuppyError::StoreUnavailable(format!("in-memory table lock poisoned: {}", e))
}

#[async_trait]
impl PuppyService for InMemoryPuppyService {
    async fn list(&self) -> PuppyResult<Vec<Puppy>> {
        let table = self.table.read().map_err(poisoned)?;

        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> PuppyResult<Option<Puppy>> {
        let table = self.table.read().map_err(poisoned)?;

        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, puppy: NewPuppy) -> PuppyResult<Puppy> {
        puppy.check()?;

        let mut table = self.table.write().map_err(poisoned)?;

        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| PuppyError::StoreUnavailable("id sequence exhausted".to_string()))?;
        table.last_id = id;

        let created = puppy.into_puppy(id, Utc::now());
        table.rows.insert(id, created.clone());

        Ok(created)
    }

    async fn update(&self, id: i32, changes: PuppyChanges) -> PuppyResult<Option<Puppy>> {
        let mut table = self.table.write().map_err(poisoned)?;

        let Some(puppy) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        changes.check()?;
        changes.apply_to(puppy);

        Ok(Some(puppy.clone()))
    }

    async fn delete(&self, id: i32) -> PuppyResult<bool> {
        let mut table = self.table.write().map_err(poisoned)?;

        Ok(table.rows.remove(&id).is_some())
    }
}
