//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::AdminScope;
use crate::booking;
use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate, ReservationStatusUpdate};
use crate::db::repository::reservation;
use crate::utils::AppResult;

/// POST /api/reservations - create a reservation (public)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    let created = booking::reservations::create(state.pool(), payload).await?;
    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub restaurant_id: Option<i64>,
}

/// GET /api/admin/reservations - list reservations, newest first
pub async fn list(
    State(state): State<ServerState>,
    scope: AdminScope,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let mut conn = state.pool().acquire().await?;
    let filter = scope.narrow_filter(query.restaurant_id);
    let reservations = reservation::find_all(&mut conn, filter).await?;
    Ok(Json(reservations))
}

/// PATCH /api/admin/reservations/:id - transition reservation status
pub async fn update_status(
    State(state): State<ServerState>,
    scope: AdminScope,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationStatusUpdate>,
) -> AppResult<Json<Reservation>> {
    let updated =
        booking::reservations::update_status(state.pool(), id, payload.status, &scope).await?;
    Ok(Json(updated))
}
