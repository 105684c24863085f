//! Booking engine
//!
//! The availability and conflict-resolution core. Everything here is invoked
//! per request with no cross-request in-memory state; shared state lives in
//! the database, and every mutating operation runs inside one transaction so
//! its conflict check and write are effectively atomic.
//!
//! # Components
//!
//! - [`slot`] - half-open time interval value type
//! - [`conflict`] - overlap detection against reservations and blocks
//! - [`status`] - day-granular display status resolution
//! - [`reservations`] - reservation lifecycle state machine
//! - [`table_status`] - manual override controller
//! - [`blocks`] - table block management

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::utils::AppResult;

pub mod blocks;
pub mod conflict;
pub mod reservations;
pub mod slot;
pub mod status;
pub mod table_status;

pub use slot::TimeSlot;
pub use table_status::StatusChangeSummary;

/// Open a write transaction that takes SQLite's write lock up front.
/// Racing writers queue on `busy_timeout` instead of failing when a deferred
/// read tries to upgrade mid-transaction.
pub(crate) async fn write_tx(pool: &SqlitePool) -> AppResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}
