//! Overlap detection
//!
//! Decides whether a candidate slot collides with existing confirmed
//! reservations or blocks for a table. Cancelled and declined reservations
//! never count; boundary-adjacent slots never count.

use sqlx::SqliteConnection;

use super::TimeSlot;
use crate::db::repository::{reservation, table_block};
use crate::utils::AppResult;

/// True if the slot overlaps any confirmed reservation or block on the table.
///
/// Reservations are checked first to fail fast on the common case.
/// `exclude_reservation_id` skips one reservation, for re-validating an
/// existing booking while it is being edited.
pub async fn has_conflict(
    conn: &mut SqliteConnection,
    table_id: i64,
    slot: &TimeSlot,
    exclude_reservation_id: Option<i64>,
) -> AppResult<bool> {
    if reservation::exists_overlapping(conn, table_id, slot, exclude_reservation_id).await? {
        return Ok(true);
    }
    if table_block::exists_overlapping(conn, table_id, slot).await? {
        return Ok(true);
    }
    Ok(false)
}
