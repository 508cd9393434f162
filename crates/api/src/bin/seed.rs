//! Reset the database and load the demo catalogue.
//!
//! Both demo users sign in with the password in `SEED_PASSWORD`
//! (default `password123`).

use anyhow::Context;

use utalii_api::auth::password::hash_password;
use utalii_api::telemetry;

const DEFAULT_DATABASE_URL: &str = "sqlite://utalii.db";
const DEFAULT_SEED_PASSWORD: &str = "password123";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
    let password =
        std::env::var("SEED_PASSWORD").unwrap_or_else(|_| DEFAULT_SEED_PASSWORD.into());

    let pool = utalii_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    utalii_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let password_hash =
        hash_password(&password).map_err(|e| anyhow::anyhow!("Password hashing error: {e}"))?;

    let summary = utalii_db::seed::seed_demo_data(&pool, &password_hash)
        .await
        .context("Failed to seed demo data")?;

    tracing::info!(
        users = summary.users,
        services = summary.services,
        parks = summary.parks,
        hotels = summary.hotels,
        beaches = summary.beaches,
        favorites = summary.favorites,
        "Seeding complete"
    );

    pool.close().await;
    Ok(())
}
