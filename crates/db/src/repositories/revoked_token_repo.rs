//! Repository for the `revoked_tokens` table (logout denylist).

use sqlx::SqlitePool;
use utalii_core::types::{DbId, UnixSeconds};

use crate::models::revoked_token::RevokedToken;

pub struct RevokedTokenRepo;

impl RevokedTokenRepo {
    /// Record a token id as revoked. Revoking twice is a no-op.
    pub async fn revoke(
        pool: &SqlitePool,
        jti: &str,
        user_id: DbId,
        expires_at: UnixSeconds,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO revoked_tokens (jti, user_id, expires_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (jti) DO NOTHING",
        )
        .bind(jti)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn find(pool: &SqlitePool, jti: &str) -> Result<Option<RevokedToken>, sqlx::Error> {
        sqlx::query_as::<_, RevokedToken>(
            "SELECT jti, user_id, expires_at FROM revoked_tokens WHERE jti = $1",
        )
        .bind(jti)
        .fetch_optional(pool)
        .await
    }

    pub async fn is_revoked(pool: &SqlitePool, jti: &str) -> Result<bool, sqlx::Error> {
        Ok(Self::find(pool, jti).await?.is_some())
    }

    /// Drop entries whose token has already expired. Returns the number removed.
    pub async fn purge_expired(pool: &SqlitePool, now: UnixSeconds) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at <= $1")
            .bind(now)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
