//! Route definitions for authentication and the current user.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, profile};
use crate::state::AppState;

/// ```text
/// POST /signup   -> signup
/// POST /login    -> login
/// POST /logout   -> logout (requires auth)
/// GET  /home     -> home (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/home", get(profile::home))
}
