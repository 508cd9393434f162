//! Read-only catalogue listings. No authentication required.
//!
//! Each listing nests its owning user and favorite as rendered by
//! [`EntityGraph`].

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use utalii_core::relations::EntityKind;
use utalii_db::graph::EntityGraph;

use crate::error::AppResult;
use crate::state::AppState;

async fn list(state: &AppState, kind: EntityKind) -> AppResult<Json<Vec<Value>>> {
    let graph = EntityGraph::load(&state.pool).await?;
    Ok(Json(graph.serialize_all(kind)))
}

/// GET /hotels
pub async fn list_hotels(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    list(&state, EntityKind::Hotel).await
}

/// GET /parks
pub async fn list_parks(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    list(&state, EntityKind::Park).await
}

/// GET /beaches
pub async fn list_beaches(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    list(&state, EntityKind::Beach).await
}
