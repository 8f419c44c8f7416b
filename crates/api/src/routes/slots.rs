use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/slots",
            get(handlers::slots::list_slots).post(handlers::slots::create_slot),
        )
        .route(
            "/slots/availability",
            get(handlers::slots::get_availability),
        )
        .route("/slots/:id", delete(handlers::slots::delete_slot))
        .route("/slots/:id/book", post(handlers::slots::book_slot))
}
