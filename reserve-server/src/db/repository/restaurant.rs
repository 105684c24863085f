//! Restaurant Repository

use sqlx::SqliteConnection;

use super::RepoResult;
use crate::db::models::Restaurant;
use crate::utils::time::now_millis;

pub async fn find_all(conn: &mut SqliteConnection) -> RepoResult<Vec<Restaurant>> {
    let restaurants = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, floor_shape, created_at FROM restaurant ORDER BY name",
    )
    .fetch_all(conn)
    .await?;
    Ok(restaurants)
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<Restaurant>> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, floor_shape, created_at FROM restaurant WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(restaurant)
}

pub async fn create(
    conn: &mut SqliteConnection,
    name: &str,
    floor_shape: Option<&str>,
) -> RepoResult<Restaurant> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "INSERT INTO restaurant (name, floor_shape, created_at) VALUES (?1, ?2, ?3) \
         RETURNING id, name, floor_shape, created_at",
    )
    .bind(name)
    .bind(floor_shape)
    .bind(now_millis())
    .fetch_one(conn)
    .await?;
    Ok(restaurant)
}
