//! Reserve Server - restaurant table reservation engine
//!
//! # Architecture
//!
//! The core is the booking engine: the rules deciding, per table and date,
//! whether a reservation or block may be created, what status the floor plan
//! shows, and how cancellations and manual overrides cascade without leaving
//! contradictory state.
//!
//! # Module layout
//!
//! ```text
//! reserve-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── auth/          # bearer token validation, admin scope
//! ├── booking/       # availability + conflict-resolution engine
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, models, repositories
//! └── utils/         # errors, logging, time parsing
//! ```

pub mod api;
pub mod auth;
pub mod booking;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{AdminScope, JwtService};
pub use booking::{StatusChangeSummary, TimeSlot};
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
