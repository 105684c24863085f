//! Dining Table API module (admin)

mod handler;

use axum::{
    Router,
    routing::{post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", axum::routing::patch(handler::update).delete(handler::delete))
        .route("/{id}/status", put(handler::set_status))
}
