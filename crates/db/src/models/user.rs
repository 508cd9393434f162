//! User entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use utalii_core::types::DbId;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// `crate::graph` renders users for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    /// Argon2id PHC string.
    pub password: String,
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
}
