//! Handler for the authenticated user's own profile.

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use utalii_core::error::CoreError;
use utalii_core::relations::EntityKind;
use utalii_db::graph::EntityGraph;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /home
///
/// The token's user with their services, hotels and favorites.
pub async fn home(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<Json<Value>> {
    let profile = EntityGraph::load(&state.pool)
        .await?
        .serialize(EntityKind::User, auth_user.user_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    Ok(Json(profile))
}
