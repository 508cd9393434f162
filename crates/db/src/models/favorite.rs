//! Favorite entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utalii_core::types::DbId;

/// A row from the `favorites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new favorite.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavorite {
    pub name: String,
}
