//! Repository for the `hotels` table.

use sqlx::{SqliteExecutor, SqlitePool};
use utalii_core::types::DbId;

use crate::models::hotel::{CreateHotel, Hotel};

const COLUMNS: &str = "id, name, image, description, location, rating, address, \
                       price_range, user_id, favorite_id";

pub struct HotelRepo;

impl HotelRepo {
    /// Insert a new hotel, returning the created row.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateHotel,
    ) -> Result<Hotel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels
                (name, image, description, location, rating, address, price_range, user_id, favorite_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(&input.name)
            .bind(&input.image)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.rating)
            .bind(&input.address)
            .bind(input.price_range)
            .bind(input.user_id)
            .bind(input.favorite_id)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE id = $1");
        sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels ORDER BY id");
        sqlx::query_as::<_, Hotel>(&query).fetch_all(executor).await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
