//! API handlers for the AssetBase REST endpoints

pub mod assets;
pub mod checkouts;
pub mod health;
pub mod maintenance;
pub mod openapi;
pub mod stats;
pub mod users;
