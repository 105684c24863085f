//! Dining Table Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Operator-forced status recorded on a table for one specific date.
///
/// Only authoritative when `manual_status_date` matches the queried date;
/// overrides for other dates stay dormant and are never auto-purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ManualStatus {
    Occupied,
    Empty,
    Blocked,
}

impl ManualStatus {
    /// Display status this override forces on the floor plan
    pub fn resolved(&self) -> TableStatus {
        match self {
            ManualStatus::Occupied => TableStatus::Reserved,
            ManualStatus::Empty => TableStatus::Available,
            ManualStatus::Blocked => TableStatus::Blocked,
        }
    }

    /// Whether this override rejects new bookings for its date.
    /// A forced-empty table still accepts reservations.
    pub fn rejects_bookings(&self) -> bool {
        matches!(self, ManualStatus::Occupied | ManualStatus::Blocked)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ManualStatus::Occupied => "occupied",
            ManualStatus::Empty => "empty",
            ManualStatus::Blocked => "blocked",
        }
    }
}

/// Day-granular display status of a table, as computed by the status resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Available,
    Reserved,
    Blocked,
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DiningTable {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub capacity: i64,
    // Floor-plan geometry, irrelevant to the booking engine
    pub position_x: i64,
    pub position_y: i64,
    pub width: i64,
    pub height: i64,
    /// rect | circle
    pub shape: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_status: Option<ManualStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_status_date: Option<NaiveDate>,
}

impl DiningTable {
    /// The override that applies to `date`, if any
    pub fn override_for(&self, date: NaiveDate) -> Option<ManualStatus> {
        match (self.manual_status, self.manual_status_date) {
            (Some(status), Some(d)) if d == date => Some(status),
            _ => None,
        }
    }
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub restaurant_id: i64,
    pub name: String,
    pub capacity: Option<i64>,
    pub position_x: Option<i64>,
    pub position_y: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub shape: Option<String>,
    pub zone: Option<String>,
}

/// Update dining table payload — only present fields are applied.
/// `zone` distinguishes absent (keep) from explicit null (clear).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::serde_helpers::double_option"
    )]
    pub zone: Option<Option<String>>,
}

/// Force-set table status payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: ManualStatus,
    /// YYYY-MM-DD, parsed at the handler layer
    pub date: String,
}

/// Table with its resolved display status for a queried date
#[derive(Debug, Clone, Serialize)]
pub struct TableAvailability {
    #[serde(flatten)]
    pub table: DiningTable,
    pub status: TableStatus,
}
