//! Server state

use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared server state — cheap to clone, handed to every handler
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    /// JWT validation service (Arc shared ownership)
    pub jwt: Arc<JwtService>,
}

impl ServerState {
    /// Initialize state: working directory, database pool, JWT service
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = DbService::new(&config.database_path).await?;
        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config: config.clone(),
            db,
            jwt,
        })
    }

    /// State over an in-memory database, used by tests
    pub async fn in_memory(config: Config) -> Result<Self, AppError> {
        let db = DbService::in_memory().await?;
        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));
        Ok(Self { config, db, jwt })
    }

    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.db.pool
    }
}
