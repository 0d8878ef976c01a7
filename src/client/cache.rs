//! Client-side state: the last known list of puppies plus one error slot

use crate::client::api::PuppyApi;
use crate::core::puppy::{NewPuppy, Puppy, PuppyChanges};

pub const LOAD_FAILED: &str = "Failed to load puppies";
pub const ADD_FAILED: &str = "Failed to add puppy";
pub const UPDATE_FAILED: &str = "Failed to update puppy";
pub const DELETE_FAILED: &str = "Failed to delete puppy";

/// In-memory mirror of the server's puppies
///
/// The cache never refetches after a write: it splices in the record the
/// server returned (or drops the deleted id). A failed call only writes the
/// error slot, so records unrelated to the failure are left as they were.
/// The error slot holds the most recent failure and is cleared by the next
/// success.
#[derive(Debug, Clone)]
pub struct PuppyCache {
    puppies: Vec<Puppy>,
    loading: bool,
    error: Option<String>,
}

impl Default for PuppyCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PuppyCache {
    /// An empty cache that has not loaded yet
    pub fn new() -> Self {
        Self {
            puppies: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn puppies(&self) -> &[Puppy] {
        &self.puppies
    }

    pub fn find(&self, id: i32) -> Option<&Puppy> {
        self.puppies.iter().find(|p| p.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a failure that happened before any request was made.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Replace the cached list with the server's.
    pub async fn load<A>(&mut self, api: &A) -> bool
    where
        A: PuppyApi + ?Sized,
    {
        self.loading = true;
        self.error = None;

        let loaded = match api.list().await {
            Ok(puppies) => {
                self.puppies = puppies;
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "listing puppies failed");
                self.error = Some(e.describe(LOAD_FAILED));
                false
            }
        };

        self.loading = false;
        loaded
    }

    pub async fn add<A>(&mut self, api: &A, puppy: &NewPuppy) -> Option<Puppy>
    where
        A: PuppyApi + ?Sized,
    {
        match api.create(puppy).await {
            Ok(created) => {
                self.puppies.push(created.clone());
                self.error = None;
                Some(created)
            }
            Err(e) => {
                self.error = Some(e.describe(ADD_FAILED));
                None
            }
        }
    }

    pub async fn update<A>(&mut self, api: &A, id: i32, changes: &PuppyChanges) -> Option<Puppy>
    where
        A: PuppyApi + ?Sized,
    {
        match api.update(id, changes).await {
            Ok(updated) => {
                if let Some(slot) = self.puppies.iter_mut().find(|p| p.id == id) {
                    *slot = updated.clone();
                }
                self.error = None;
                Some(updated)
            }
            Err(e) => {
                self.error = Some(e.describe(UPDATE_FAILED));
                None
            }
        }
    }

    pub async fn remove<A>(&mut self, api: &A, id: i32) -> bool
    where
        A: PuppyApi + ?Sized,
    {
        match api.delete(id).await {
            Ok(()) => {
                self.puppies.retain(|p| p.id != id);
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.describe(DELETE_FAILED));
                false
            }
        }
    }
}
