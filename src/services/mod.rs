//! Business logic services

pub mod assets;
pub mod checkouts;
pub mod maintenance;
pub mod stats;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub assets: assets::AssetsService,
    pub users: users::UsersService,
    pub maintenance: maintenance::MaintenanceService,
    pub checkouts: checkouts::CheckoutsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            assets: assets::AssetsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            checkouts: checkouts::CheckoutsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
