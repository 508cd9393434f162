pub mod auth;
pub mod listings;
pub mod profile;
pub mod services;
