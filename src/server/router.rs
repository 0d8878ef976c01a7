//! Router builder for the puppy resource

use crate::server::handlers::{
    PuppyAppState, create_puppy, delete_puppy, get_puppy, list_puppies, update_puppy,
};
use axum::{Router, routing::get};

/// Build the puppy routes
///
/// - GET    /puppies      - List every puppy
/// - POST   /puppies      - Create a puppy
/// - GET    /puppies/{id} - Get one puppy
/// - PUT    /puppies/{id} - Merge fields onto a puppy
/// - DELETE /puppies/{id} - Delete a puppy
pub fn build_puppy_routes(state: PuppyAppState) -> Router {
    Router::new()
        .route("/puppies", get(list_puppies).post(create_puppy))
        .route(
            "/puppies/{id}",
            get(get_puppy).put(update_puppy).delete(delete_puppy),
        )
        .with_state(state)
}
