//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::booking;
use crate::core::ServerState;
use crate::db::models::{DiningTable, Restaurant, TableAvailability};
use crate::db::repository::{dining_table, restaurant};
use crate::utils::time::parse_date;
use crate::utils::{AppError, AppResult};

/// GET /api/restaurants - list all restaurants
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    let mut conn = state.pool().acquire().await?;
    let restaurants = restaurant::find_all(&mut conn).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/:id - fetch one restaurant
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Restaurant>> {
    let mut conn = state.pool().acquire().await?;
    let found = restaurant::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", id)))?;
    Ok(Json(found))
}

/// GET /api/restaurants/:id/tables - tables of a restaurant
pub async fn list_tables(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let mut conn = state.pool().acquire().await?;
    restaurant::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", id)))?;
    let tables = dining_table::find_by_restaurant(&mut conn, id).await?;
    Ok(Json(tables))
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// YYYY-MM-DD
    pub date: String,
}

/// GET /api/restaurants/:id/availability?date= - per-table resolved status
pub async fn availability(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<Vec<TableAvailability>>> {
    let date = parse_date(&query.date)?;
    let result = booking::status::list_availability(state.pool(), id, date).await?;
    Ok(Json(result))
}
