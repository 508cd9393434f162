use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and the config
/// sits behind an `Arc`. Each request checks its own connection out of the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: utalii_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
