//! # Slot Handlers
//!
//! Thin adapters between HTTP requests and [`SlotStore`](slotbook_store::SlotStore)
//! operations. Reads share the store lock; every mutation holds the write
//! guard for its whole check-then-act sequence.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use slotbook_core::models::slot::{BookSlotRequest, CreateSlotRequest, SlotQuery, SlotResponse};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Lists slots, optionally filtered by start time and booking state.
///
/// # Endpoint
///
/// ```text
/// GET /slots?from=2025-11-25T09:00:00Z&to=2025-11-25T17:00:00Z&booked=false
/// ```
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotQuery>,
) -> Json<Vec<SlotResponse>> {
    let slots = state.store.read().await.list(&query);
    debug!(count = slots.len(), "Listed slots");

    Json(slots)
}

/// Returns the open 30-minute windows between `from` and `to`.
///
/// # Endpoint
///
/// ```text
/// GET /slots/availability?from=2025-11-25T09:00:00Z&to=2025-11-25T17:00:00Z
/// ```
///
/// # Errors
///
/// * `SlotError::MissingRange` - `from` or `to` was not supplied
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let windows = state.store.read().await.available(&query)?;
    debug!(count = windows.len(), "Computed availability");

    Ok(Json(windows))
}

/// Creates a slot and responds with `201 Created`.
///
/// # Errors
///
/// * `SlotError::InvalidRange` - start is not before end
/// * `SlotError::InvalidDuration` - length is not a multiple of 15, 30 or 60 minutes
/// * `SlotError::Overlap` - the interval intersects an existing slot
#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<(StatusCode, Json<SlotResponse>), AppError> {
    let slot = state.store.write().await.create(&payload)?;

    Ok((StatusCode::CREATED, Json(slot)))
}

/// Books a slot for the given email.
///
/// # Errors
///
/// * `SlotError::InvalidEmail` - the email is not `local@domain.tld` shaped
/// * `SlotError::NotFound` - no slot has this id
/// * `SlotError::AlreadyBooked` - the slot is taken
#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<SlotResponse>, AppError> {
    let slot = state.store.write().await.book(id, &payload.email)?;

    Ok(Json(slot))
}

/// Deletes an unbooked slot and responds with `204 No Content`.
///
/// # Errors
///
/// * `SlotError::NotFound` - no slot has this id
/// * `SlotError::AlreadyBooked` - booked slots cannot be deleted
#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.write().await.delete(id)?;

    Ok(StatusCode::NO_CONTENT)
}
