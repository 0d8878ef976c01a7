//! Axum extractors for the puppy routes
//!
//! Both extractors reject with [`PuppyError`], so a bad path or body produces
//! the same `{"error": ...}` shape as a store failure.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use crate::core::error::PuppyError;

/// The `{id}` path segment.
///
/// A segment that is not an integer cannot name a stored record, so it is
/// reported as `NotFound` instead of a routing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuppyId(pub i32);

impl<S> FromRequestParts<S> for PuppyId
where
    S: Send + Sync,
{
    type Rejection = PuppyError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| PuppyError::NotFound)?;

        raw.trim()
            .parse::<i32>()
            .map(PuppyId)
            .map_err(|_| PuppyError::NotFound)
    }
}

/// JSON body whose rejection is a store-level `ValidationFailure`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(PuppyError))]
pub struct PuppyJson<T>(pub T);
