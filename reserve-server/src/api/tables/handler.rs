//! Dining Table API Handlers (admin)

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::AdminScope;
use crate::booking::{self, StatusChangeSummary};
use crate::core::ServerState;
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatusUpdate};
use crate::db::repository::{dining_table, restaurant};
use crate::utils::time::parse_date;
use crate::utils::{AppError, AppResult};

/// POST /api/admin/tables - create a table
pub async fn create(
    State(state): State<ServerState>,
    scope: AdminScope,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    scope.authorize(payload.restaurant_id)?;

    let mut conn = state.pool().acquire().await?;
    restaurant::find_by_id(&mut conn, payload.restaurant_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Restaurant {} not found", payload.restaurant_id))
        })?;

    let table = dining_table::create(&mut conn, payload).await?;
    Ok(Json(table))
}

/// PATCH /api/admin/tables/:id - partial update, only present fields applied
pub async fn update(
    State(state): State<ServerState>,
    scope: AdminScope,
    Path(id): Path<i64>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    let mut conn = state.pool().acquire().await?;
    let existing = dining_table::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    scope.authorize(existing.restaurant_id)?;

    let table = dining_table::update(&mut conn, id, payload).await?;
    Ok(Json(table))
}

/// DELETE /api/admin/tables/:id - hard delete (reservations/blocks cascade)
pub async fn delete(
    State(state): State<ServerState>,
    scope: AdminScope,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let mut conn = state.pool().acquire().await?;
    let existing = dining_table::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    scope.authorize(existing.restaurant_id)?;

    let deleted = dining_table::delete(&mut conn, id).await?;
    Ok(Json(deleted))
}

/// PUT /api/admin/tables/:id/status - force-set table status for a date
pub async fn set_status(
    State(state): State<ServerState>,
    scope: AdminScope,
    Path(id): Path<i64>,
    Json(payload): Json<TableStatusUpdate>,
) -> AppResult<Json<StatusChangeSummary>> {
    let date = parse_date(&payload.date)?;
    let summary =
        booking::table_status::set_status(state.pool(), id, date, payload.status, &scope).await?;
    Ok(Json(summary))
}
