//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`restaurants`] - public restaurant reads and availability
//! - [`reservations`] - reservation creation (public) and admin lifecycle
//! - [`tables`] - admin table management and manual status override
//! - [`blocks`] - admin table blocks

use axum::Router;
use http::HeaderValue;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod blocks;
pub mod health;
pub mod reservations;
pub mod restaurants;
pub mod tables;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Public API
        .merge(restaurants::router())
        // Reservations - public create, admin lifecycle
        .merge(reservations::router())
        // Admin API - bearer token required per handler
        .merge(tables::router())
        .merge(blocks::router())
        // Health - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: &ServerState) -> Router {
    let x_request_id = http::HeaderName::from_static("x-request-id");
    build_router()
        // ========== Tower HTTP Middleware ==========
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, XRequestId))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone())
}
