//! # Error Handling Middleware
//!
//! Maps [`SlotError`] kinds to HTTP status codes and a JSON body of the form
//! `{ "error": "<code>", "message": "<text>" }`, so every endpoint reports
//! failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::SlotError;
use tracing::warn;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>` and use `?` on store results;
/// the `From<SlotError>` impl performs the wrapping.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotbook_api::middleware::error_handling::AppError;
/// use slotbook_core::models::slot::{SlotQuery, SlotResponse};
/// use slotbook_store::SlotStore;
///
/// async fn handler() -> Result<Json<Vec<SlotResponse>>, AppError> {
///     let store = SlotStore::seeded();
///     let windows = store.available(&SlotQuery::default())?;
///     Ok(Json(windows))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SlotError::MissingRange
            | SlotError::InvalidRange
            | SlotError::InvalidDuration
            | SlotError::Overlap
            | SlotError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            SlotError::NotFound(_) => StatusCode::NOT_FOUND,
            SlotError::AlreadyBooked(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(code = self.0.code(), error = %self.0, "Request rejected");

        let body = Json(json!({
            "error": self.0.code(),
            "message": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}
