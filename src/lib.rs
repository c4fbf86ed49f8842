//! Data-access layer for a sports league stored in SQLite.
//!
//! Mutating functions return a [`ReturnValue`] instead of an error, profile
//! reads return an invalid sentinel when nothing matches, and the analytical
//! reports return ordered id lists. Only the schema lifecycle functions
//! surface real errors, since they run once at setup or teardown.
pub mod db;
pub mod error;
pub mod logging;
pub mod models;

/// Store handle and the complete access API.
pub use db::*;

pub use error::StoreError;

/// The domain types every access function exchanges.
pub use models::{Competition, Match, Player, PreferredFoot, Stadium, Team};
