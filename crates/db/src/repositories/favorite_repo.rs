//! Repository for the `favorites` table.

use sqlx::{SqliteExecutor, SqlitePool};
use utalii_core::relations::EntityKind;
use utalii_core::types::DbId;

use crate::models::favorite::{CreateFavorite, Favorite};
use crate::models::user_favorite::FavoriteType;
use crate::repositories::cascade::delete_owned;

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for favorites and the listings they own.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a new favorite, returning the created row.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateFavorite,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!("INSERT INTO favorites (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(&input.name)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE id = $1");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites ORDER BY id");
        sqlx::query_as::<_, Favorite>(&query).fetch_all(executor).await
    }

    /// Move a park, hotel or beach under this favorite.
    ///
    /// A listing has at most one owning favorite, so attaching replaces any
    /// previous owner. Returns `false` if the listing does not exist.
    pub async fn attach<'e>(
        executor: impl SqliteExecutor<'e>,
        favorite_id: DbId,
        kind: FavoriteType,
        listing_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let sql = match kind {
            FavoriteType::Park => "UPDATE parks SET favorite_id = $1 WHERE id = $2",
            FavoriteType::Hotel => "UPDATE hotels SET favorite_id = $1 WHERE id = $2",
            FavoriteType::Beach => "UPDATE beaches SET favorite_id = $1 WHERE id = $2",
        };
        let result = sqlx::query(sql)
            .bind(favorite_id)
            .bind(listing_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a favorite together with every park, hotel and beach it owns.
    ///
    /// Returns `true` if the favorite existed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let removed = delete_owned(pool, EntityKind::Favorite, id).await?;
        if removed.existed {
            tracing::debug!(
                favorite_id = id,
                listings = removed.owned,
                "Favorite deleted with owned listings"
            );
        }
        Ok(removed.existed)
    }
}
