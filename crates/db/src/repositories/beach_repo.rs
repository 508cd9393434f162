//! Repository for the `beaches` table.

use sqlx::{SqliteExecutor, SqlitePool};
use utalii_core::types::DbId;

use crate::models::beach::{Beach, CreateBeach};

const COLUMNS: &str = "id, name, image, description, location, rating, address, favorite_id";

pub struct BeachRepo;

impl BeachRepo {
    /// Insert a new beach, returning the created row.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateBeach,
    ) -> Result<Beach, sqlx::Error> {
        let query = format!(
            "INSERT INTO beaches (name, image, description, location, rating, address, favorite_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Beach>(&query)
            .bind(&input.name)
            .bind(&input.image)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.rating)
            .bind(&input.address)
            .bind(input.favorite_id)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Beach>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM beaches WHERE id = $1");
        sqlx::query_as::<_, Beach>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Beach>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM beaches ORDER BY id");
        sqlx::query_as::<_, Beach>(&query).fetch_all(executor).await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM beaches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
