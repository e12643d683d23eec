//! Cafe Repository

use super::{RepoError, RepoResult};
use shared::models::{Cafe, CafeCreate};
use sqlx::SqlitePool;

/// Find all cafes ordered by id
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>("SELECT * FROM cafe ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(cafes)
}

/// Find cafe by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>("SELECT * FROM cafe WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(cafe)
}

/// Find cafes by exact location match (case-sensitive)
pub async fn find_by_location(pool: &SqlitePool, location: &str) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>("SELECT * FROM cafe WHERE location = ? ORDER BY id")
        .bind(location)
        .fetch_all(pool)
        .await?;
    Ok(cafes)
}

/// Create a new cafe, returning the stored row with its assigned id
pub async fn create(pool: &SqlitePool, data: CafeCreate) -> RepoResult<Cafe> {
    let cafe = sqlx::query_as::<_, Cafe>(
        "INSERT INTO cafe \
         (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING *",
    )
    .bind(&data.name)
    .bind(&data.map_url)
    .bind(&data.img_url)
    .bind(&data.location)
    .bind(&data.seats)
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .bind(&data.coffee_price)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Cafe '{}' already exists", data.name))
        }
        other => other,
    })?;
    Ok(cafe)
}

/// Overwrite `coffee_price` only. Returns false if the id does not exist.
pub async fn update_price(pool: &SqlitePool, id: i64, new_price: &str) -> RepoResult<bool> {
    let result = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a cafe by id. Returns false if the id does not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
