//! Table Block Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Table block entity — a hard unavailability window.
///
/// Has no status field: existence alone makes the table unavailable for the
/// window. Hard-deleted (not soft-cancelled) when superseded by a
/// force-to-empty override.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TableBlock {
    pub id: i64,
    pub table_id: i64,
    pub restaurant_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: i64,
}

/// Create table block payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableBlockCreate {
    pub table_id: i64,
    pub restaurant_id: i64,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM or HH:MM:SS
    pub start_time: String,
    pub end_time: String,
    pub reason: Option<String>,
}
