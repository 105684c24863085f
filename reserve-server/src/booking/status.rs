//! Day-granular status resolution
//!
//! Answers "what should the floor plan show for this table on this date" —
//! a coarser question than the overlap detector's interval check, so blocks
//! and reservations count by mere existence on the date.

use chrono::NaiveDate;
use sqlx::{SqliteConnection, SqlitePool};

use crate::db::models::{DiningTable, TableAvailability, TableStatus};
use crate::db::repository::{dining_table, reservation, restaurant, table_block};
use crate::utils::{AppError, AppResult};

/// Resolve the single authoritative display status for a table on a date.
///
/// Precedence:
/// 1. Manual override naming exactly this date — shadows the ledger entirely,
///    even when inconsistent with actual reservations or blocks.
/// 2. Any block on the date → blocked.
/// 3. Any confirmed reservation on the date → reserved.
/// 4. Otherwise available.
pub async fn resolve_status(
    conn: &mut SqliteConnection,
    table: &DiningTable,
    date: NaiveDate,
) -> AppResult<TableStatus> {
    if let Some(forced) = table.override_for(date) {
        return Ok(forced.resolved());
    }

    if table_block::exists_on(conn, table.id, date).await? {
        return Ok(TableStatus::Blocked);
    }

    if reservation::exists_confirmed_on(conn, table.id, date).await? {
        return Ok(TableStatus::Reserved);
    }

    Ok(TableStatus::Available)
}

/// Resolve every table of a restaurant for one date (floor-plan view)
pub async fn list_availability(
    pool: &SqlitePool,
    restaurant_id: i64,
    date: NaiveDate,
) -> AppResult<Vec<TableAvailability>> {
    let mut conn = pool.acquire().await?;

    restaurant::find_by_id(&mut conn, restaurant_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", restaurant_id)))?;

    let tables = dining_table::find_by_restaurant(&mut conn, restaurant_id).await?;
    let mut result = Vec::with_capacity(tables.len());
    for table in tables {
        let status = resolve_status(&mut conn, &table, date).await?;
        result.push(TableAvailability { table, status });
    }
    Ok(result)
}
