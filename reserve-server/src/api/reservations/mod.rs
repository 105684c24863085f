//! Reservation API module
//!
//! Creation is public (guests book directly); listing and lifecycle
//! transitions require an admin scope.

mod handler;

use axum::{Router, routing::get, routing::patch, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/reservations", post(handler::create))
        .route("/api/admin/reservations", get(handler::list))
        .route("/api/admin/reservations/{id}", patch(handler::update_status))
}
