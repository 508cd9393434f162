//! Service entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utalii_core::types::DbId;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    pub location: Option<String>,
    pub user_id: Option<DbId>,
}

/// DTO for creating a new service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub location: Option<String>,
    pub user_id: Option<DbId>,
}

/// DTO for updating an existing service. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
}
