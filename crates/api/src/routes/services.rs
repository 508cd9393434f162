//! Route definitions for the `/services` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// ```text
/// GET    /services        -> list_services
/// POST   /services        -> create_service
/// PUT    /services/{id}   -> update_service
/// DELETE /services/{id}   -> delete_service
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/services/{id}",
            put(services::update_service).delete(services::delete_service),
        )
}
