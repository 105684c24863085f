//! Manual override controller
//!
//! The operator's force-set of a table's status for one date. Authoritative
//! by design: it bypasses the overlap detector entirely, and instead cascades
//! over the booking ledger so the ledger cannot contradict the forced status.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::auth::AdminScope;
use crate::db::models::ManualStatus;
use crate::db::repository::{dining_table, reservation, table_block};
use crate::utils::{AppError, AppResult};

/// What the cascade touched
#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusChangeSummary {
    pub cancelled_count: u64,
    pub removed_block_count: u64,
}

/// Force-set a table's status for a date and reconcile the ledger.
///
/// - `empty`: soft-cancel every confirmed reservation for the table/date and
///   hard-delete every block (a destructive normalize-to-empty).
/// - `blocked`: soft-cancel reservations; existing blocks stay — they stack
///   harmlessly under an override that already forces blocked.
/// - `occupied`: pure display override, no ledger mutation.
///
/// The override is then recorded unconditionally, overwriting any prior
/// override even for a different date.
pub async fn set_status(
    pool: &SqlitePool,
    table_id: i64,
    date: NaiveDate,
    forced: ManualStatus,
    scope: &AdminScope,
) -> AppResult<StatusChangeSummary> {
    let mut tx = super::write_tx(pool).await?;

    let table = dining_table::find_by_id(&mut tx, table_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", table_id)))?;

    scope.authorize(table.restaurant_id)?;

    let mut summary = StatusChangeSummary::default();
    match forced {
        ManualStatus::Empty => {
            summary.cancelled_count =
                reservation::cancel_all_confirmed(&mut tx, table_id, date).await?;
            summary.removed_block_count =
                table_block::delete_for_table_date(&mut tx, table_id, date).await?;
        }
        ManualStatus::Blocked => {
            summary.cancelled_count =
                reservation::cancel_all_confirmed(&mut tx, table_id, date).await?;
        }
        ManualStatus::Occupied => {}
    }

    dining_table::set_manual_status(&mut tx, table_id, forced, date).await?;

    tx.commit().await?;

    info!(
        target: "booking",
        table_id,
        date = %date,
        forced = forced.as_str(),
        cancelled = summary.cancelled_count,
        removed_blocks = summary.removed_block_count,
        "Table status forced"
    );
    Ok(summary)
}
