//! Revoked access-token model.

use sqlx::FromRow;
use utalii_core::types::{DbId, UnixSeconds};

/// A row from the `revoked_tokens` table.
///
/// Rows only need to outlive the token they block; once `expires_at` has
/// passed the token is rejected on expiry alone and the row can be purged.
#[derive(Debug, Clone, FromRow)]
pub struct RevokedToken {
    pub jti: String,
    pub user_id: DbId,
    pub expires_at: UnixSeconds,
}
