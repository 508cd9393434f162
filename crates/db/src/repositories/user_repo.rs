//! Repository for the `users` table.

use sqlx::{SqliteExecutor, SqlitePool};
use utalii_core::relations::EntityKind;
use utalii_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::repositories::cascade::delete_owned;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone_number, password";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique-violation database error if the email or phone
    /// number is already taken.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, phone_number, password)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.password_hash)
            .fetch_one(executor)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by phone number (exact match).
    pub async fn find_by_phone_number(
        pool: &SqlitePool,
        phone_number: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE phone_number = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(phone_number)
            .fetch_optional(pool)
            .await
    }

    /// List all users in insertion order.
    pub async fn list<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query).fetch_all(executor).await
    }

    /// Delete a user and everything it owns.
    ///
    /// Services, hotels and favorite pairings are removed in the same
    /// transaction as the user row. Returns `true` if the user existed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let removed = delete_owned(pool, EntityKind::User, id).await?;
        if removed.existed {
            tracing::debug!(user_id = id, owned = removed.owned, "User deleted with owned rows");
        }
        Ok(removed.existed)
    }
}
