//! Reservation lifecycle
//!
//! State machine: created as `confirmed`; `cancelled` and `declined` are
//! terminal. Creation runs its conflict check and insert inside one
//! transaction so two racing bookings cannot both pass the check.

use sqlx::SqlitePool;
use tracing::info;

use super::{TimeSlot, conflict};
use crate::auth::AdminScope;
use crate::db::models::{Reservation, ReservationCreate, ReservationStatus};
use crate::db::repository::{dining_table, reservation};
use crate::utils::time::{parse_date, parse_time};
use crate::utils::{AppError, AppResult};

/// Create a reservation.
///
/// Fails with validation on a bad interval, not-found on a missing table,
/// conflict when the table carries an occupied/blocked override for the date
/// (forced-empty does not gate), and conflict when the slot overlaps an
/// existing confirmed reservation or block.
pub async fn create(pool: &SqlitePool, data: ReservationCreate) -> AppResult<Reservation> {
    let slot = TimeSlot::new(
        parse_date(&data.date)?,
        parse_time(&data.start_time)?,
        parse_time(&data.end_time)?,
    )?;

    let mut tx = super::write_tx(pool).await?;

    let table = dining_table::find_by_id(&mut tx, data.table_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", data.table_id)))?;

    if table.restaurant_id != data.restaurant_id {
        return Err(AppError::validation(format!(
            "Table {} does not belong to restaurant {}",
            data.table_id, data.restaurant_id
        )));
    }

    if let Some(forced) = table.override_for(slot.date)
        && forced.rejects_bookings()
    {
        return Err(AppError::conflict(format!(
            "This table is currently unavailable (set by admin as {})",
            forced.as_str()
        )));
    }

    if conflict::has_conflict(&mut tx, table.id, &slot, None).await? {
        return Err(AppError::conflict(
            "This table is already reserved or blocked for the selected time range",
        ));
    }

    let created = reservation::insert(
        &mut tx,
        table.id,
        table.restaurant_id,
        &slot,
        &data.guest_name,
        data.guest_phone.as_deref(),
        data.guest_email.as_deref(),
        data.preorder_note.as_deref(),
    )
    .await?;

    tx.commit().await?;

    info!(
        target: "booking",
        reservation_id = created.id,
        table_id = created.table_id,
        date = %created.date,
        "Reservation confirmed"
    );
    Ok(created)
}

/// Transition a reservation to `cancelled` or `declined`.
///
/// `confirmed` is not a reachable target: un-cancelling has no product
/// trigger, so it is rejected at the boundary. Terminal reservations accept
/// no further transitions.
///
/// Cascade: when the last confirmed reservation covering a table/date goes
/// terminal and the table's override names exactly that date, the override is
/// cleared so the table does not stay stuck on a stale forced status.
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    new_status: ReservationStatus,
    scope: &AdminScope,
) -> AppResult<Reservation> {
    if new_status == ReservationStatus::Confirmed {
        return Err(AppError::validation(
            "Reservation status can only be set to 'cancelled' or 'declined'",
        ));
    }

    let mut tx = super::write_tx(pool).await?;

    let existing = reservation::find_by_id(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;

    scope.authorize(existing.restaurant_id)?;

    if existing.status.is_terminal() {
        return Err(AppError::conflict(format!(
            "Reservation {} is already {}",
            id,
            existing.status.as_str()
        )));
    }

    let updated = reservation::update_status(&mut tx, id, new_status)
        .await?
        .ok_or_else(|| AppError::internal(format!("Reservation {} vanished mid-update", id)))?;

    // Cascade: clear a same-date override once no confirmed reservation
    // covers the date anymore. Overrides for other dates stay untouched.
    let remaining =
        reservation::count_confirmed(&mut tx, existing.table_id, existing.date, Some(id)).await?;
    if remaining == 0
        && let Some(table) = dining_table::find_by_id(&mut tx, existing.table_id).await?
        && table.override_for(existing.date).is_some()
    {
        dining_table::clear_manual_status(&mut tx, table.id).await?;
        info!(
            target: "booking",
            table_id = table.id,
            date = %existing.date,
            "Cleared manual override after last covering reservation ended"
        );
    }

    tx.commit().await?;

    info!(
        target: "booking",
        reservation_id = id,
        status = updated.status.as_str(),
        "Reservation status updated"
    );
    Ok(updated)
}
