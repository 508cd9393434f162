//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Nested JSON views are assembled by `crate::graph`, not by these structs.

pub mod beach;
pub mod favorite;
pub mod hotel;
pub mod park;
pub mod revoked_token;
pub mod service;
pub mod user;
pub mod user_favorite;
