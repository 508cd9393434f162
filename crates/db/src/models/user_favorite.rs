//! The user/favorite association entity.
//!
//! A pairing row carries its own attributes (`favorite_type`, `review`), so it
//! is modelled as a first-class record rather than a bare join table. Its
//! lifetime is tied to the pairing: deleting either endpoint deletes the row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utalii_core::types::DbId;

/// Which kind of listing a pairing refers to.
///
/// Stored as lowercase text. Reserved: persisted and echoed back, but no
/// handler branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum FavoriteType {
    Park,
    Hotel,
    Beach,
}

/// A row from the `user_favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserFavorite {
    pub user_id: DbId,
    pub favorite_id: DbId,
    pub favorite_type: FavoriteType,
    pub review: Option<String>,
}

/// DTO for pairing a user with a favorite.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserFavorite {
    pub user_id: DbId,
    pub favorite_id: DbId,
    pub favorite_type: FavoriteType,
    pub review: Option<String>,
}
