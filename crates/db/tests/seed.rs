use sqlx::SqlitePool;
use utalii_core::relations::EntityKind;
use utalii_db::graph::EntityGraph;
use utalii_db::models::user::CreateUser;
use utalii_db::repositories::{FavoriteRepo, HotelRepo, ParkRepo, ServiceRepo, UserRepo};
use utalii_db::seed::{seed_demo_data, SeedSummary};

/// Seeding a fresh database inserts the full demo catalogue.
#[sqlx::test(migrations = "./migrations")]
async fn test_seed_inserts_catalogue(pool: SqlitePool) {
    let summary = seed_demo_data(&pool, "$argon2id$demo").await.unwrap();

    assert_eq!(
        summary,
        SeedSummary {
            users: 2,
            services: 2,
            parks: 5,
            hotels: 4,
            beaches: 4,
            favorites: 2,
        }
    );

    let john = UserRepo::find_by_email(&pool, "john@example.com")
        .await
        .unwrap()
        .expect("seeded user must exist");
    let graph = EntityGraph::load(&pool).await.unwrap();
    let profile = graph.serialize(EntityKind::User, john.id).unwrap();
    assert_eq!(profile["services"].as_array().unwrap().len(), 1);
    assert_eq!(profile["hotels"].as_array().unwrap().len(), 1);
    assert_eq!(profile["favorites"].as_array().unwrap().len(), 1);
    assert_eq!(profile["favorites"][0]["name"], "Wildlife Experiences");

    let favorites = FavoriteRepo::list(&pool).await.unwrap();
    let getaways = graph.serialize(EntityKind::Favorite, favorites[1].id).unwrap();
    assert_eq!(getaways["name"], "Beach Getaways");
    assert_eq!(getaways["beaches"].as_array().unwrap().len(), 1);
    assert_eq!(getaways["hotels"].as_array().unwrap().len(), 1);
    assert!(getaways["parks"].as_array().unwrap().is_empty());
}

/// Running the seed twice replaces rather than duplicates, and ids restart.
#[sqlx::test(migrations = "./migrations")]
async fn test_seed_is_repeatable(pool: SqlitePool) {
    seed_demo_data(&pool, "$argon2id$demo").await.unwrap();
    seed_demo_data(&pool, "$argon2id$demo").await.unwrap();

    let users = UserRepo::list(&pool).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 1);
    assert_eq!(ServiceRepo::list(&pool).await.unwrap().len(), 2);
    assert_eq!(HotelRepo::list(&pool).await.unwrap().len(), 4);
}

/// A seed that fails partway leaves the previous contents untouched.
#[sqlx::test(migrations = "./migrations")]
async fn test_failed_seed_rolls_back(pool: SqlitePool) {
    let existing = UserRepo::create(
        &pool,
        &CreateUser {
            name: "Existing".into(),
            email: "existing@example.com".into(),
            phone_number: "0711111111".into(),
            password_hash: "$argon2id$existing".into(),
        },
    )
    .await
    .unwrap();
    // Beaches are inserted after users, services, parks and hotels.
    sqlx::query(
        "CREATE TRIGGER reject_beaches BEFORE INSERT ON beaches
         BEGIN SELECT RAISE(ABORT, 'beaches rejected'); END",
    )
    .execute(&pool)
    .await
    .unwrap();

    assert!(seed_demo_data(&pool, "$argon2id$demo").await.is_err());

    let users = UserRepo::list(&pool).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, existing.id);
    assert!(ServiceRepo::list(&pool).await.unwrap().is_empty());
    assert!(ParkRepo::list(&pool).await.unwrap().is_empty());
    assert!(HotelRepo::list(&pool).await.unwrap().is_empty());
}
