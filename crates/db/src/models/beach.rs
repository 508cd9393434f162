//! Beach entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utalii_core::types::DbId;

/// A row from the `beaches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Beach {
    pub id: DbId,
    pub name: String,
    pub image: String,
    pub description: String,
    pub location: String,
    pub rating: i32,
    pub address: String,
    pub favorite_id: Option<DbId>,
}

/// DTO for creating a new beach.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBeach {
    pub name: String,
    pub image: String,
    pub description: String,
    pub location: String,
    pub rating: i32,
    pub address: String,
    pub favorite_id: Option<DbId>,
}
