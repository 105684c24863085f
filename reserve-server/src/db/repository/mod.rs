//! Repository Module
//!
//! Plain-SQL persistence functions over the SQLite pool. Every function takes
//! a `&mut SqliteConnection` so callers can run several of them inside one
//! transaction (the booking engine relies on this for its check-then-insert
//! atomicity).

pub mod dining_table;
pub mod reservation;
pub mod restaurant;
pub mod table_block;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
