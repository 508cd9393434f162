use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable or behind.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest applied schema migration, `null` before the first one.
    pub schema_version: Option<i64>,
    /// Embedded migrations the database has not applied yet.
    pub pending_migrations: usize,
}

/// GET /health -- service, database and schema health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = utalii_db::health_check(&state.pool).await.is_ok();

    let (schema_version, pending_migrations) = if db_healthy {
        match utalii_db::migration_status(&state.pool).await {
            Ok(migrations) => (migrations.latest, migrations.pending),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read migration status");
                (None, utalii_db::MIGRATOR.iter().count())
            }
        }
    } else {
        (None, utalii_db::MIGRATOR.iter().count())
    };

    let status = if db_healthy && pending_migrations == 0 {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
        pending_migrations,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
