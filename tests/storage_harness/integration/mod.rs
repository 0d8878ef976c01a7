//! Integration test infrastructure for puppy stores.
//!
//! Mounts a store behind the real server stack so the macros validate it
//! through the full REST layer (HTTP → handler → PuppyService → response).
//!
//! # Architecture
//!
//! ```text
//! axum_test::TestServer
//!     └─ Router (built by ServerBuilder)
//!         ├─ GET    /puppies        → list_puppies
//!         ├─ POST   /puppies        → create_puppy
//!         ├─ GET    /puppies/{id}   → get_puppy
//!         ├─ PUT    /puppies/{id}   → update_puppy
//!         └─ DELETE /puppies/{id}   → delete_puppy
//! ```

#[macro_use]
pub mod rest_tests;

use axum::Router;
use puppy::core::service::PuppyService;
use puppy::server::ServerBuilder;
use std::sync::Arc;

/// Build the production router around `service`.
pub fn build_test_router(service: Arc<dyn PuppyService>) -> Router {
    ServerBuilder::new()
        .with_shared_service(service)
        .build()
        .expect("router builds with a service")
}
