//! Repository for the `services` table.

use sqlx::{SqliteExecutor, SqlitePool};
use utalii_core::types::DbId;

use crate::models::service::{CreateService, Service, UpdateService};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image, description, location, user_id";

/// Provides CRUD operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateService,
    ) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (name, description, image, location, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.location)
            .bind(input.user_id)
            .fetch_one(executor)
            .await
    }

    /// Find a service by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all services in insertion order.
    pub async fn list<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY id");
        sqlx::query_as::<_, Service>(&query).fetch_all(executor).await
    }

    /// Update a service. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                location = COALESCE($5, location)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
