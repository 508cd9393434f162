use axum::routing::get;
use axum::Router;

use crate::handlers::listings;
use crate::state::AppState;

/// Catalogue collections, each a bare JSON array.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(listings::list_hotels))
        .route("/parks", get(listings::list_parks))
        .route("/beaches", get(listings::list_beaches))
}
