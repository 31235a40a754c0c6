//! Storage layer for the asset registry.
//!
//! Each collection sits behind a trait so the in-memory backing can be
//! swapped for a persistent store without touching the service layer.

pub mod assets;
pub mod checkouts;
pub mod maintenance;
pub mod seed;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

pub use assets::AssetsRepository;
pub use checkouts::CheckoutsRepository;
pub use maintenance::MaintenanceRepository;
pub use users::UsersRepository;

/// Container aggregating the four collection stores
#[derive(Clone)]
pub struct Repository {
    pub assets: Arc<dyn AssetsRepository>,
    pub users: Arc<dyn UsersRepository>,
    pub maintenance: Arc<dyn MaintenanceRepository>,
    pub checkouts: Arc<dyn CheckoutsRepository>,
}

impl Repository {
    /// Create a repository backed by in-memory stores.
    ///
    /// `latency` is awaited at the head of every store operation to mimic a
    /// remote backend; pass `Duration::ZERO` to disable.
    pub fn in_memory(latency: Duration) -> Self {
        Self {
            assets: Arc::new(assets::MemoryAssetsRepository::new(latency)),
            users: Arc::new(users::MemoryUsersRepository::new(latency)),
            maintenance: Arc::new(maintenance::MemoryMaintenanceRepository::new(latency)),
            checkouts: Arc::new(checkouts::MemoryCheckoutsRepository::new(latency)),
        }
    }
}

/// Suspend the current task for the configured artificial latency
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
