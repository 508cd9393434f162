//! Repository for the `user_favorites` association table.

use sqlx::{SqliteExecutor, SqlitePool};
use utalii_core::types::DbId;

use crate::models::user_favorite::{CreateUserFavorite, UserFavorite};

pub struct UserFavoriteRepo;

impl UserFavoriteRepo {
    /// Pair a user with a favorite. Fails on a duplicate pairing.
    pub async fn link<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateUserFavorite,
    ) -> Result<UserFavorite, sqlx::Error> {
        sqlx::query_as::<_, UserFavorite>(
            "INSERT INTO user_favorites (user_id, favorite_id, favorite_type, review)
             VALUES ($1, $2, $3, $4)
             RETURNING user_id, favorite_id, favorite_type, review",
        )
        .bind(input.user_id)
        .bind(input.favorite_id)
        .bind(input.favorite_type)
        .bind(&input.review)
        .fetch_one(executor)
        .await
    }

    /// Remove a pairing. Returns `true` if it existed.
    pub async fn unlink(
        pool: &SqlitePool,
        user_id: DbId,
        favorite_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM user_favorites WHERE user_id = $1 AND favorite_id = $2")
                .bind(user_id)
                .bind(favorite_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every pairing, ordered by user then favorite.
    pub async fn list<'e>(
        executor: impl SqliteExecutor<'e>,
    ) -> Result<Vec<UserFavorite>, sqlx::Error> {
        sqlx::query_as::<_, UserFavorite>(
            "SELECT user_id, favorite_id, favorite_type, review
             FROM user_favorites
             ORDER BY user_id, favorite_id",
        )
        .fetch_all(executor)
        .await
    }
}
