//! Table Block API Handlers (admin)

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::AdminScope;
use crate::booking;
use crate::core::ServerState;
use crate::db::models::{TableBlock, TableBlockCreate};
use crate::db::repository::table_block;
use crate::utils::AppResult;
use crate::utils::time::parse_date;

/// POST /api/admin/table-blocks - create a block (same overlap gate as bookings)
pub async fn create(
    State(state): State<ServerState>,
    scope: AdminScope,
    Json(payload): Json<TableBlockCreate>,
) -> AppResult<Json<TableBlock>> {
    let created = booking::blocks::create(state.pool(), payload, &scope).await?;
    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub restaurant_id: Option<i64>,
    /// YYYY-MM-DD
    pub date: Option<String>,
}

/// GET /api/admin/table-blocks - list blocks, newest first
pub async fn list(
    State(state): State<ServerState>,
    scope: AdminScope,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<TableBlock>>> {
    let date = query.date.as_deref().map(parse_date).transpose()?;
    let filter = scope.narrow_filter(query.restaurant_id);

    let mut conn = state.pool().acquire().await?;
    let blocks = table_block::find_all(&mut conn, filter, date).await?;
    Ok(Json(blocks))
}

/// DELETE /api/admin/table-blocks/:id - hard delete one block
pub async fn delete(
    State(state): State<ServerState>,
    scope: AdminScope,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    booking::blocks::delete(state.pool(), id, &scope).await?;
    Ok(Json(true))
}
