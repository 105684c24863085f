//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity (餐厅)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    /// Free-text floor geometry blob consumed by the floor-plan UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_shape: Option<String>,
    pub created_at: i64,
}
