//! Typed error handling for the puppy API
//!
//! Every store and handler failure is one of three kinds. Each maps to an HTTP
//! status and a `{"error": "..."}` body, which is the shape the client reads
//! back into its single error field.
//!
//! | Kind                | Status | Body                              |
//! |---------------------|--------|-----------------------------------|
//! | `NotFound`          | 404    | `Puppy not found`                 |
//! | `ValidationFailure` | 500    | the rejected constraint(s)        |
//! | `StoreUnavailable`  | 500    | `Internal server error` (logged)  |
//!
//! Validation failures keep the 500 status the table-backed API
//! has always returned for rejected writes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for ids that do not name a stored record.
pub const NOT_FOUND_MESSAGE: &str = "Puppy not found";

/// Message returned in place of store failure details.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Result alias used across stores and handlers.
pub type PuppyResult<T> = Result<T, PuppyError>;

#[derive(Debug, Error)]
pub enum PuppyError {
    /// The requested id is absent
    #[error("Puppy not found")]
    NotFound,

    /// The store rejected a write (missing or oversized field, malformed body)
    #[error("Validation failed: {0}")]
    ValidationFailure(String),

    /// Connection or query failure; never retried
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Error body shared by the server and the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl PuppyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PuppyError::NotFound => StatusCode::NOT_FOUND,
            PuppyError::ValidationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PuppyError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the client; store failure details stay in the server log.
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            PuppyError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            PuppyError::ValidationFailure(_) => self.to_string(),
            PuppyError::StoreUnavailable(_) => INTERNAL_MESSAGE.to_string(),
        };
        ErrorResponse { error }
    }
}

impl IntoResponse for PuppyError {
    fn into_response(self) -> Response {
        match &self {
            PuppyError::StoreUnavailable(detail) => {
                tracing::error!(error = %detail, "puppy store unavailable");
            }
            PuppyError::ValidationFailure(detail) => {
                tracing::warn!(error = %detail, "puppy write rejected");
            }
            PuppyError::NotFound => {}
        }

        let status = self.status_code();
        (status, Json(self.to_response())).into_response()
    }
}

impl From<JsonRejection> for PuppyError {
    fn from(rejection: JsonRejection) -> Self {
        PuppyError::ValidationFailure(rejection.body_text())
    }
}
