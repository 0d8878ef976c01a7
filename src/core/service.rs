//! Repository trait for puppy records

use async_trait::async_trait;

use crate::core::error::PuppyResult;
use crate::core::puppy::{NewPuppy, Puppy, PuppyChanges};

/// Service trait for the `puppies` table
///
/// The handler layer only sees this trait, so the backing store (in-memory or
/// relational) can be swapped without touching any route. Absence is reported
/// through `Option`/`bool`, never as an error; errors are reserved for
/// rejected writes and unreachable stores.
#[async_trait]
pub trait PuppyService: Send + Sync {
    /// All records, ordered by id
    async fn list(&self) -> PuppyResult<Vec<Puppy>>;

    /// A single record, or `None` if the id is absent
    async fn get(&self, id: i32) -> PuppyResult<Option<Puppy>>;

    /// Insert a record; the store assigns the id and applies column defaults
    async fn create(&self, puppy: NewPuppy) -> PuppyResult<Puppy>;

    /// Merge `changes` onto an existing record, or `None` if the id is absent
    async fn update(&self, id: i32, changes: PuppyChanges) -> PuppyResult<Option<Puppy>>;

    /// Remove a record; `true` if one existed
    async fn delete(&self, id: i32) -> PuppyResult<bool>;
}
