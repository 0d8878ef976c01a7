//! Core module containing the puppy model, repository trait and error types

pub mod error;
pub mod extractors;
pub mod puppy;
pub mod service;
pub mod validation;

pub use error::{ErrorResponse, PuppyError, PuppyResult};
pub use extractors::{PuppyId, PuppyJson};
pub use puppy::{NewPuppy, Puppy, PuppyChanges};
pub use service::PuppyService;
