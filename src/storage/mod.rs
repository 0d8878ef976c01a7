//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryPuppyService;
#[cfg(feature = "postgres")]
pub use postgres::{PostgresPuppyService, ensure_schema};
