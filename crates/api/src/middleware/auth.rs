//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use utalii_core::error::CoreError;
use utalii_core::types::{DbId, UnixSeconds};
use utalii_db::repositories::RevokedTokenRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Tokens revoked by logout are rejected even while their signature and
/// expiry are still valid.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// Token identifier, used as the revocation key.
    pub jti: String,
    /// Token expiry; a revocation entry is only needed until then.
    pub expires_at: UnixSeconds,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if RevokedTokenRepo::is_revoked(&state.pool, &claims.jti).await? {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Token has been revoked".into(),
            )));
        }

        Ok(AuthUser {
            user_id: claims.sub,
            jti: claims.jti,
            expires_at: claims.exp,
        })
    }
}
