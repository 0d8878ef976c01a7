//! Puppy HTTP handlers

use crate::core::error::{PuppyError, PuppyResult};
use crate::core::extractors::{PuppyId, PuppyJson};
use crate::core::puppy::{NewPuppy, Puppy, PuppyChanges};
use crate::core::service::PuppyService;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;

/// State shared by the puppy routes
#[derive(Clone)]
pub struct PuppyAppState {
    pub service: Arc<dyn PuppyService>,
}

/// GET /puppies
pub async fn list_puppies(State(state): State<PuppyAppState>) -> PuppyResult<Json<Vec<Puppy>>> {
    let puppies = state.service.list().await?;
    Ok(Json(puppies))
}

/// GET /puppies/{id}
pub async fn get_puppy(
    State(state): State<PuppyAppState>,
    PuppyId(id): PuppyId,
) -> PuppyResult<Json<Puppy>> {
    state
        .service
        .get(id)
        .await?
        .map(Json)
        .ok_or(PuppyError::NotFound)
}

/// POST /puppies
pub async fn create_puppy(
    State(state): State<PuppyAppState>,
    PuppyJson(payload): PuppyJson<NewPuppy>,
) -> PuppyResult<(StatusCode, Json<Puppy>)> {
    let puppy = state.service.create(payload).await?;
    tracing::debug!(id = puppy.id, "puppy created");
    Ok((StatusCode::CREATED, Json(puppy)))
}

/// PUT /puppies/{id}
pub async fn update_puppy(
    State(state): State<PuppyAppState>,
    PuppyId(id): PuppyId,
    PuppyJson(changes): PuppyJson<PuppyChanges>,
) -> PuppyResult<Json<Puppy>> {
    state
        .service
        .update(id, changes)
        .await?
        .map(Json)
        .ok_or(PuppyError::NotFound)
}

/// DELETE /puppies/{id}
pub async fn delete_puppy(
    State(state): State<PuppyAppState>,
    PuppyId(id): PuppyId,
) -> PuppyResult<StatusCode> {
    if state.service.delete(id).await? {
        tracing::debug!(id, "puppy deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(PuppyError::NotFound)
    }
}
