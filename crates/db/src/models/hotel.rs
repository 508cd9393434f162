//! Hotel entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utalii_core::types::DbId;

/// A row from the `hotels` table.
///
/// A hotel has two parents: the user that lists it and the favorite that
/// groups it. Either may be unset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hotel {
    pub id: DbId,
    pub name: String,
    pub image: String,
    pub description: String,
    pub location: String,
    pub rating: i32,
    pub address: String,
    pub price_range: i32,
    pub user_id: Option<DbId>,
    pub favorite_id: Option<DbId>,
}

/// DTO for creating a new hotel.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHotel {
    pub name: String,
    pub image: String,
    pub description: String,
    pub location: String,
    pub rating: i32,
    pub address: String,
    pub price_range: i32,
    pub user_id: Option<DbId>,
    pub favorite_id: Option<DbId>,
}
