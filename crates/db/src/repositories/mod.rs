//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Inserts and full-table
//! reads accept any `SqliteExecutor` so callers can run several of them in
//! one transaction. Operations that touch more than one table run inside a
//! single transaction; an early return drops the transaction and rolls it
//! back.

mod cascade;
pub mod beach_repo;
pub mod favorite_repo;
pub mod hotel_repo;
pub mod park_repo;
pub mod revoked_token_repo;
pub mod service_repo;
pub mod user_favorite_repo;
pub mod user_repo;

pub use beach_repo::BeachRepo;
pub use favorite_repo::FavoriteRepo;
pub use hotel_repo::HotelRepo;
pub use park_repo::ParkRepo;
pub use revoked_token_repo::RevokedTokenRepo;
pub use service_repo::ServiceRepo;
pub use user_favorite_repo::UserFavoriteRepo;
pub use user_repo::UserRepo;
