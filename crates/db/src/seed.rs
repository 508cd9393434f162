//! Demo catalogue used by the `utalii-seed` binary.
//!
//! [`seed_demo_data`] wipes every table and reinserts a fixed set of users,
//! services, parks, hotels, beaches and favorites. The wipe and every insert
//! share one transaction, so a failed seed leaves the previous contents intact.

use sqlx::{SqliteConnection, SqlitePool};

use crate::models::beach::CreateBeach;
use crate::models::favorite::CreateFavorite;
use crate::models::hotel::CreateHotel;
use crate::models::park::CreatePark;
use crate::models::service::CreateService;
use crate::models::user::CreateUser;
use crate::models::user_favorite::{CreateUserFavorite, FavoriteType};
use crate::repositories::{
    BeachRepo, FavoriteRepo, HotelRepo, ParkRepo, ServiceRepo, UserFavoriteRepo, UserRepo,
};

/// Row counts inserted by [`seed_demo_data`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub services: usize,
    pub parks: usize,
    pub hotels: usize,
    pub beaches: usize,
    pub favorites: usize,
}

/// Delete every row from every application table and reset id sequences.
pub async fn clear_all(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    clear_tables(&mut *tx).await?;
    tx.commit().await
}

async fn clear_tables(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for table in [
        "user_favorites",
        "services",
        "hotels",
        "parks",
        "beaches",
        "favorites",
        "users",
        "revoked_tokens",
        "sqlite_sequence",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

/// Replace the database contents with the demo catalogue.
///
/// Both demo users share `password_hash`, which must already be hashed.
pub async fn seed_demo_data(
    pool: &SqlitePool,
    password_hash: &str,
) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;
    clear_tables(&mut *tx).await?;
    let mut summary = SeedSummary::default();

    let john = UserRepo::create(
        &mut *tx,
        &CreateUser {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone_number: "1234567890".into(),
            password_hash: password_hash.into(),
        },
    )
    .await?;
    let jane = UserRepo::create(
        &mut *tx,
        &CreateUser {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            phone_number: "0987654321".into(),
            password_hash: password_hash.into(),
        },
    )
    .await?;
    summary.users = 2;

    for service in [
        CreateService {
            name: "Kayaking".into(),
            image: Some("https://tinyurl.com/4y2mfxy7".into()),
            description: "Enjoy a thrilling kayaking experience.".into(),
            location: Some("Lake Victoria".into()),
            user_id: Some(john.id),
        },
        CreateService {
            name: "Safari Tour".into(),
            image: Some("https://tinyurl.com/5thzdc64".into()),
            description: "Experience a breathtaking safari tour.".into(),
            location: Some("Masai Mara".into()),
            user_id: Some(jane.id),
        },
    ] {
        ServiceRepo::create(&mut *tx, &service).await?;
        summary.services += 1;
    }

    let mut parks = Vec::new();
    for (name, image, description, location, rating, address) in [
        (
            "Serengeti National Park",
            "https://tinyurl.com/mvzybp6s",
            "A majestic wildlife park filled with rich biodiversity.",
            "Tanzania",
            5,
            "Serengeti, TZ",
        ),
        (
            "Yellowstone National Park",
            "https://tinyurl.com/2vn86sve",
            "Explore the geothermal wonders of Yellowstone.",
            "USA",
            4,
            "Yellowstone, WY",
        ),
        (
            "Kruger National Park",
            "https://tinyurl.com/5c3mr6t8",
            "Experience the thrill of African wildlife in Kruger.",
            "South Africa",
            5,
            "Kruger, SA",
        ),
        (
            "Zion National Park",
            "https://tinyurl.com/9xv65mxk",
            "Discover the natural beauty of Zion.",
            "USA",
            4,
            "Zion, UT",
        ),
        (
            "Yosemite National Park",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRU3THzfjyPIUzdjFlf3rWnir3SEMDSKns1Qw&s",
            "Marvel at the stunning landscapes of Yosemite.",
            "USA",
            5,
            "Yosemite, CA",
        ),
    ] {
        let park = ParkRepo::create(
            &mut *tx,
            &CreatePark {
                name: name.into(),
                image: image.into(),
                description: description.into(),
                location: location.into(),
                rating,
                address: address.into(),
                favorite_id: None,
            },
        )
        .await?;
        parks.push(park);
    }
    summary.parks = parks.len();

    let mut hotels = Vec::new();
    for (name, image, description, location, rating, address, price_range, owner) in [
        (
            "Luxury Safari Lodge",
            "https://tinyurl.com/ysurwsee",
            "A luxury lodge in the heart of the wilderness.",
            "Masai Mara",
            5,
            "Masai Mara, Kenya",
            300,
            john.id,
        ),
        (
            "Coastal Beach Resort",
            "https://tinyurl.com/6fbay9we",
            "A resort with stunning views of the ocean.",
            "Diani Beach",
            4,
            "Diani Beach, Kenya",
            250,
            jane.id,
        ),
        (
            "Mountain Chalet",
            "https://tinyurl.com/ywnpefxy",
            "A cozy chalet in the mountains.",
            "Mount Kenya",
            4,
            "Mount Kenya, Kenya",
            200,
            jane.id,
        ),
        (
            "Mercure hotel",
            "https://tinyurl.com/y3w57nn4",
            "A lodge with stunning views of the Grand Canyon.",
            "Grand Canyon",
            5,
            "Grand Canyon, AZ",
            400,
            jane.id,
        ),
    ] {
        let hotel = HotelRepo::create(
            &mut *tx,
            &CreateHotel {
                name: name.into(),
                image: image.into(),
                description: description.into(),
                location: location.into(),
                rating,
                address: address.into(),
                price_range,
                user_id: Some(owner),
                favorite_id: None,
            },
        )
        .await?;
        hotels.push(hotel);
    }
    summary.hotels = hotels.len();

    let mut beaches = Vec::new();
    for (name, image, description, location, rating, address) in [
        (
            "Diani Beach",
            "https://tinyurl.com/23x3amj9",
            "A pristine white-sand beach on the Kenyan coast.",
            "Kenya",
            5,
            "Diani Beach, Kenya",
        ),
        (
            "Bondi Beach",
            "https://tinyurl.com/4yptem6k",
            "Australia's iconic beach destination.",
            "Australia",
            4,
            "Bondi, NSW",
        ),
        (
            "Waikiki Beach",
            "https://tinyurl.com/ydhdteyy",
            "A world-famous beach in Honolulu, Hawaii.",
            "Hawaii",
            5,
            "Waikiki, HI",
        ),
        (
            "Cancun Beach",
            "https://tinyurl.com/56shkvd4",
            "A tropical paradise in Mexico.",
            "Mexico",
            4,
            "Cancun, Mexico",
        ),
    ] {
        let beach = BeachRepo::create(
            &mut *tx,
            &CreateBeach {
                name: name.into(),
                image: image.into(),
                description: description.into(),
                location: location.into(),
                rating,
                address: address.into(),
                favorite_id: None,
            },
        )
        .await?;
        beaches.push(beach);
    }
    summary.beaches = beaches.len();

    let wildlife = FavoriteRepo::create(
        &mut *tx,
        &CreateFavorite {
            name: "Wildlife Experiences".into(),
        },
    )
    .await?;
    let getaways = FavoriteRepo::create(
        &mut *tx,
        &CreateFavorite {
            name: "Beach Getaways".into(),
        },
    )
    .await?;
    summary.favorites = 2;

    for park in &parks[..2] {
        FavoriteRepo::attach(&mut *tx, wildlife.id, FavoriteType::Park, park.id).await?;
    }
    FavoriteRepo::attach(&mut *tx, getaways.id, FavoriteType::Beach, beaches[0].id).await?;
    FavoriteRepo::attach(&mut *tx, getaways.id, FavoriteType::Hotel, hotels[1].id).await?;

    UserFavoriteRepo::link(
        &mut *tx,
        &CreateUserFavorite {
            user_id: john.id,
            favorite_id: wildlife.id,
            favorite_type: FavoriteType::Park,
            review: Some("The migration season is unforgettable.".into()),
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(?summary, "Demo data seeded");
    Ok(summary)
}
