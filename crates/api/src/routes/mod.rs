pub mod auth;
pub mod health;
pub mod listings;
pub mod services;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /signup                 register (public)
/// /login                  login (public)
/// /logout                 logout (requires auth)
/// /home                   current user profile (requires auth)
///
/// /hotels                 list
/// /parks                  list
/// /beaches                list
///
/// /services               list, create
/// /services/{id}          update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(listings::router())
        .merge(services::router())
}
