//! Dining Table Repository

use chrono::NaiveDate;
use sqlx::SqliteConnection;

use super::{RepoError, RepoResult};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate, ManualStatus};

const COLUMNS: &str = "id, restaurant_id, name, capacity, position_x, position_y, \
                       width, height, shape, zone, manual_status, manual_status_date";

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(table)
}

pub async fn find_by_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(&format!(
        "SELECT {COLUMNS} FROM dining_table WHERE restaurant_id = ?1 ORDER BY name"
    ))
    .bind(restaurant_id)
    .fetch_all(conn)
    .await?;
    Ok(tables)
}

pub async fn create(
    conn: &mut SqliteConnection,
    data: DiningTableCreate,
) -> RepoResult<DiningTable> {
    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "INSERT INTO dining_table \
         (restaurant_id, name, capacity, position_x, position_y, width, height, shape, zone) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
         RETURNING {COLUMNS}"
    ))
    .bind(data.restaurant_id)
    .bind(&data.name)
    .bind(data.capacity.unwrap_or(4))
    .bind(data.position_x.unwrap_or(0))
    .bind(data.position_y.unwrap_or(0))
    .bind(data.width.unwrap_or(100))
    .bind(data.height.unwrap_or(80))
    .bind(data.shape.as_deref().unwrap_or("rect"))
    .bind(&data.zone)
    .fetch_one(conn)
    .await?;
    Ok(table)
}

/// Partial update: only fields present in the payload are applied
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    data: DiningTableUpdate,
) -> RepoResult<DiningTable> {
    let existing = find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))?;

    let table = sqlx::query_as::<_, DiningTable>(&format!(
        "UPDATE dining_table SET name = ?1, capacity = ?2, position_x = ?3, position_y = ?4, \
         width = ?5, height = ?6, shape = ?7, zone = ?8 WHERE id = ?9 \
         RETURNING {COLUMNS}"
    ))
    .bind(data.name.unwrap_or(existing.name))
    .bind(data.capacity.unwrap_or(existing.capacity))
    .bind(data.position_x.unwrap_or(existing.position_x))
    .bind(data.position_y.unwrap_or(existing.position_y))
    .bind(data.width.unwrap_or(existing.width))
    .bind(data.height.unwrap_or(existing.height))
    .bind(data.shape.unwrap_or(existing.shape))
    .bind(data.zone.unwrap_or(existing.zone))
    .bind(id)
    .fetch_one(conn)
    .await?;
    Ok(table)
}

/// Hard delete; reservations and blocks follow via FK cascade
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM dining_table WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Record a manual override, overwriting any prior one (even for another date)
pub async fn set_manual_status(
    conn: &mut SqliteConnection,
    id: i64,
    status: ManualStatus,
    date: NaiveDate,
) -> RepoResult<()> {
    sqlx::query("UPDATE dining_table SET manual_status = ?1, manual_status_date = ?2 WHERE id = ?3")
        .bind(status)
        .bind(date)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn clear_manual_status(conn: &mut SqliteConnection, id: i64) -> RepoResult<()> {
    sqlx::query("UPDATE dining_table SET manual_status = NULL, manual_status_date = NULL WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(())
}
