//! Database Models
//!
//! Entity structs plus their Create/Update payloads. Closed status enums are
//! stored as TEXT and validated at the serde boundary, never as free-form
//! strings.

pub mod dining_table;
pub mod reservation;
pub mod restaurant;
pub mod serde_helpers;
pub mod table_block;

pub use dining_table::{
    DiningTable, DiningTableCreate, DiningTableUpdate, ManualStatus, TableAvailability,
    TableStatus, TableStatusUpdate,
};
pub use reservation::{Reservation, ReservationCreate, ReservationStatus, ReservationStatusUpdate};
pub use restaurant::Restaurant;
pub use table_block::{TableBlock, TableBlockCreate};
