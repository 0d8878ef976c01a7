//! HTTP resource handler exposing the `puppies` table as a REST resource

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::PuppyAppState;
pub use router::build_puppy_routes;
