//! Table Block Repository

use chrono::NaiveDate;
use sqlx::SqliteConnection;

use super::RepoResult;
use crate::booking::TimeSlot;
use crate::db::models::TableBlock;
use crate::utils::time::now_millis;

const COLUMNS: &str =
    "id, table_id, restaurant_id, date, start_time, end_time, reason, created_at";

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<TableBlock>> {
    let block = sqlx::query_as::<_, TableBlock>(&format!(
        "SELECT {COLUMNS} FROM table_block WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(block)
}

/// List blocks, optionally filtered by restaurant and/or date
pub async fn find_all(
    conn: &mut SqliteConnection,
    restaurant_id: Option<i64>,
    date: Option<NaiveDate>,
) -> RepoResult<Vec<TableBlock>> {
    let blocks = sqlx::query_as::<_, TableBlock>(&format!(
        "SELECT {COLUMNS} FROM table_block \
         WHERE (?1 IS NULL OR restaurant_id = ?1) AND (?2 IS NULL OR date = ?2) \
         ORDER BY date DESC, start_time DESC"
    ))
    .bind(restaurant_id)
    .bind(date)
    .fetch_all(conn)
    .await?;
    Ok(blocks)
}

pub async fn insert(
    conn: &mut SqliteConnection,
    table_id: i64,
    restaurant_id: i64,
    slot: &TimeSlot,
    reason: Option<&str>,
) -> RepoResult<TableBlock> {
    let block = sqlx::query_as::<_, TableBlock>(&format!(
        "INSERT INTO table_block (table_id, restaurant_id, date, start_time, end_time, reason, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
         RETURNING {COLUMNS}"
    ))
    .bind(table_id)
    .bind(restaurant_id)
    .bind(slot.date)
    .bind(slot.start)
    .bind(slot.end)
    .bind(reason)
    .bind(now_millis())
    .fetch_one(conn)
    .await?;
    Ok(block)
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM table_block WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Any block overlapping the slot (half-open comparison)?
pub async fn exists_overlapping(
    conn: &mut SqliteConnection,
    table_id: i64,
    slot: &TimeSlot,
) -> RepoResult<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM table_block \
         WHERE table_id = ?1 AND date = ?2 AND start_time < ?3 AND end_time > ?4",
    )
    .bind(table_id)
    .bind(slot.date)
    .bind(slot.end)
    .bind(slot.start)
    .fetch_one(conn)
    .await?;
    Ok(count > 0)
}

/// Does any block exist for the table on the date (regardless of time range)?
pub async fn exists_on(
    conn: &mut SqliteConnection,
    table_id: i64,
    date: NaiveDate,
) -> RepoResult<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM table_block WHERE table_id = ?1 AND date = ?2",
    )
    .bind(table_id)
    .bind(date)
    .fetch_one(conn)
    .await?;
    Ok(count > 0)
}

/// Hard-delete every block for the table/date. Returns the number removed.
pub async fn delete_for_table_date(
    conn: &mut SqliteConnection,
    table_id: i64,
    date: NaiveDate,
) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM table_block WHERE table_id = ?1 AND date = ?2")
        .bind(table_id)
        .bind(date)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
