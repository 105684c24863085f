//! Table block management
//!
//! Blocks are hard unavailability windows. Creation goes through the same
//! overlap gate as reservations; deletion is a hard delete.

use sqlx::SqlitePool;
use tracing::info;

use super::{TimeSlot, conflict};
use crate::auth::AdminScope;
use crate::db::models::{TableBlock, TableBlockCreate};
use crate::db::repository::{dining_table, table_block};
use crate::utils::time::{parse_date, parse_time};
use crate::utils::{AppError, AppResult};

/// Create a block, subject to the same overlap check as reservation creation
pub async fn create(
    pool: &SqlitePool,
    data: TableBlockCreate,
    scope: &AdminScope,
) -> AppResult<TableBlock> {
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

    scope.authorize(table.restaurant_id)?;

    if conflict::has_conflict(&mut tx, table.id, &slot, None).await? {
        return Err(AppError::conflict(
            "Time conflict with an existing reservation or block",
        ));
    }

    let created = table_block::insert(
        &mut tx,
        table.id,
        table.restaurant_id,
        &slot,
        data.reason.as_deref(),
    )
    .await?;

    tx.commit().await?;

    info!(
        target: "booking",
        block_id = created.id,
        table_id = created.table_id,
        date = %created.date,
        "Table block created"
    );
    Ok(created)
}

/// Hard-delete one block
pub async fn delete(pool: &SqlitePool, id: i64, scope: &AdminScope) -> AppResult<()> {
    let mut tx = super::write_tx(pool).await?;

    let block = table_block::find_by_id(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Block {} not found", id)))?;

    scope.authorize(block.restaurant_id)?;

    table_block::delete(&mut tx, id).await?;
    tx.commit().await?;

    info!(target: "booking", block_id = id, "Table block removed");
    Ok(())
}
