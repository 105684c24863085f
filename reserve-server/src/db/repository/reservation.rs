//! Reservation Repository

use chrono::NaiveDate;
use sqlx::SqliteConnection;

use super::RepoResult;
use crate::booking::TimeSlot;
use crate::db::models::{Reservation, ReservationStatus};
use crate::utils::time::now_millis;

const COLUMNS: &str = "id, table_id, restaurant_id, date, start_time, end_time, \
                       guest_name, guest_phone, guest_email, preorder_note, status, created_at";

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(reservation)
}

/// List reservations, newest first, optionally scoped to one restaurant
pub async fn find_all(
    conn: &mut SqliteConnection,
    restaurant_id: Option<i64>,
) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservation \
         WHERE (?1 IS NULL OR restaurant_id = ?1) \
         ORDER BY date DESC, start_time DESC"
    ))
    .bind(restaurant_id)
    .fetch_all(conn)
    .await?;
    Ok(reservations)
}

/// Insert a new reservation in `confirmed` state
pub async fn insert(
    conn: &mut SqliteConnection,
    table_id: i64,
    restaurant_id: i64,
    slot: &TimeSlot,
    guest_name: &str,
    guest_phone: Option<&str>,
    guest_email: Option<&str>,
    preorder_note: Option<&str>,
) -> RepoResult<Reservation> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "INSERT INTO reservation \
         (table_id, restaurant_id, date, start_time, end_time, \
          guest_name, guest_phone, guest_email, preorder_note, status, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 'confirmed', ?10) \
         RETURNING {COLUMNS}"
    ))
    .bind(table_id)
    .bind(restaurant_id)
    .bind(slot.date)
    .bind(slot.start)
    .bind(slot.end)
    .bind(guest_name)
    .bind(guest_phone)
    .bind(guest_email)
    .bind(preorder_note)
    .bind(now_millis())
    .fetch_one(conn)
    .await?;
    Ok(reservation)
}

pub async fn update_status(
    conn: &mut SqliteConnection,
    id: i64,
    status: ReservationStatus,
) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "UPDATE reservation SET status = ?1 WHERE id = ?2 RETURNING {COLUMNS}"
    ))
    .bind(status)
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(reservation)
}

/// Any confirmed reservation overlapping the slot (half-open comparison)?
pub async fn exists_overlapping(
    conn: &mut SqliteConnection,
    table_id: i64,
    slot: &TimeSlot,
    exclude_id: Option<i64>,
) -> RepoResult<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM reservation \
         WHERE table_id = ?1 AND date = ?2 AND status = 'confirmed' \
           AND start_time < ?3 AND end_time > ?4 \
           AND (?5 IS NULL OR id <> ?5)",
    )
    .bind(table_id)
    .bind(slot.date)
    .bind(slot.end)
    .bind(slot.start)
    .bind(exclude_id)
    .fetch_one(conn)
    .await?;
    Ok(count > 0)
}

/// Count confirmed reservations for a table/date, optionally excluding one id
pub async fn count_confirmed(
    conn: &mut SqliteConnection,
    table_id: i64,
    date: NaiveDate,
    exclude_id: Option<i64>,
) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM reservation \
         WHERE table_id = ?1 AND date = ?2 AND status = 'confirmed' \
           AND (?3 IS NULL OR id <> ?3)",
    )
    .bind(table_id)
    .bind(date)
    .bind(exclude_id)
    .fetch_one(conn)
    .await?;
    Ok(count)
}

/// Does any confirmed reservation exist for the table on the date?
pub async fn exists_confirmed_on(
    conn: &mut SqliteConnection,
    table_id: i64,
    date: NaiveDate,
) -> RepoResult<bool> {
    Ok(count_confirmed(conn, table_id, date, None).await? > 0)
}

/// Soft-cancel every confirmed reservation for the table/date.
/// Returns the number of reservations cancelled.
pub async fn cancel_all_confirmed(
    conn: &mut SqliteConnection,
    table_id: i64,
    date: NaiveDate,
) -> RepoResult<u64> {
    let result = sqlx::query(
        "UPDATE reservation SET status = 'cancelled' \
         WHERE table_id = ?1 AND date = ?2 AND status = 'confirmed'",
    )
    .bind(table_id)
    .bind(date)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}
