//! Shared domain primitives for the Utalii backend.
//!
//! - [`error`] -- the [`CoreError`](error::CoreError) taxonomy every layer maps into.
//! - [`relations`] -- the entity relationship graph, its cascades and serialization exclusions.
//! - [`types`] -- type aliases shared by the db and api crates.
//! - [`validation`] -- request field presence and format checks.

pub mod error;
pub mod relations;
pub mod types;
pub mod validation;
