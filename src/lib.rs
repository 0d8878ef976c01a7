//! # Puppy Rescue
//!
//! A small CRUD service tracking the puppies taken in by a rescue shelter,
//! plus the client used to browse and edit them.
//!
//! ## Layout
//!
//! - **core**: the `Puppy` record, create/update payloads, validation and the
//!   `PuppyService` repository trait
//! - **storage**: an in-memory store and a PostgreSQL store (`postgres` feature)
//! - **server**: axum handlers and the `ServerBuilder` serving `/puppies`
//! - **client**: HTTP access, a local cache of records and a text board view
//! - **config**: server and client settings from YAML and environment
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use puppy::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     ServerBuilder::new()
//!         .with_puppy_service(InMemoryPuppyService::new())
//!         .serve(config.listen_addr())
//!         .await
//! }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ErrorResponse, NewPuppy, Puppy, PuppyChanges, PuppyError, PuppyResult, PuppyService,
    };

    // === Storage ===
    pub use crate::storage::InMemoryPuppyService;
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresPuppyService, ensure_schema};

    // === Server ===
    pub use crate::server::{PuppyAppState, ServerBuilder, build_puppy_routes};

    // === Client ===
    pub use crate::client::{ClientError, HttpPuppyApi, PuppyApi, PuppyBoard, PuppyCache};

    // === Config ===
    pub use crate::config::{ClientConfig, ConfigError, ServerConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
