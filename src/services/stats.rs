//! Dashboard statistics service

use chrono::{Duration, Utc};

use crate::{
    api::stats::DashboardStats,
    error::AppResult,
    models::{AssetQuery, AssetStatus},
    repository::Repository,
};

/// Assets whose next maintenance falls within this many days count as
/// upcoming (overdue ones included, there is no lower bound)
const UPCOMING_MAINTENANCE_WINDOW_DAYS: i64 = 30;

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Aggregate registry counters for the dashboard
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let assets = self.repository.assets.list(&AssetQuery::default()).await?;

        let count_status = |status: AssetStatus| -> i64 {
            assets.iter().filter(|asset| asset.status == status).count() as i64
        };

        let horizon =
            Utc::now().date_naive() + Duration::days(UPCOMING_MAINTENANCE_WINDOW_DAYS);
        let upcoming_maintenance = assets
            .iter()
            .filter(|asset| {
                asset
                    .next_maintenance_date
                    .is_some_and(|date| date <= horizon)
            })
            .count() as i64;

        let total_maintenance_cost = self.repository.maintenance.total_cost().await?;

        Ok(DashboardStats {
            total_assets: assets.len() as i64,
            available_assets: count_status(AssetStatus::Available),
            in_use_assets: count_status(AssetStatus::InUse),
            maintenance_assets: count_status(AssetStatus::Maintenance),
            retired_assets: count_status(AssetStatus::Retired),
            total_maintenance_cost,
            upcoming_maintenance,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, Utc};
    use rust_decimal::Decimal;

    use crate::{
        models::{AssetStatus, CreateMaintenanceRecord, MaintenanceType, UpdateAsset},
        services::testing::{sample_asset, services},
    };

    #[tokio::test]
    async fn status_buckets_sum_to_total() {
        let services = services();
        for (name, status) in [
            ("MacBook Pro 16\"", AssetStatus::InUse),
            ("Dell XPS 15", AssetStatus::Available),
            ("HP LaserJet Pro", AssetStatus::Maintenance),
            ("Projector", AssetStatus::Retired),
            ("Office Desk", AssetStatus::Available),
        ] {
            let mut data = sample_asset(name);
            data.status = status;
            services.assets.create(data).await.unwrap();
        }

        let stats = services.stats.dashboard().await.unwrap();
        assert_eq!(stats.total_assets, 5);
        assert_eq!(
            stats.available_assets
                + stats.in_use_assets
                + stats.maintenance_assets
                + stats.retired_assets,
            stats.total_assets
        );
        assert_eq!(stats.available_assets, 2);

        // Buckets still sum to the total after a status edit
        let assets = services.assets.list(&Default::default()).await.unwrap();
        let update = UpdateAsset {
            status: Some(AssetStatus::Retired),
            ..Default::default()
        };
        services.assets.update(assets[0].id, &update).await.unwrap();

        let stats = services.stats.dashboard().await.unwrap();
        assert_eq!(stats.retired_assets, 2);
        assert_eq!(
            stats.available_assets
                + stats.in_use_assets
                + stats.maintenance_assets
                + stats.retired_assets,
            stats.total_assets
        );
    }

    #[tokio::test]
    async fn maintenance_cost_is_summed_over_all_records() {
        let services = services();
        let asset = services
            .assets
            .create(sample_asset("HP LaserJet Pro"))
            .await
            .unwrap();

        for cost in [Decimal::new(49_99, 2), Decimal::new(189_99, 2)] {
            services
                .maintenance
                .add(CreateMaintenanceRecord {
                    asset_id: asset.id,
                    maintenance_type: MaintenanceType::Preventive,
                    maintenance_date: NaiveDate::from_ymd_opt(2023, 7, 20).unwrap(),
                    performed_by: "TechSupport Team".to_string(),
                    cost,
                    description: "Regular inspection".to_string(),
                    notes: None,
                })
                .await
                .unwrap();
        }

        let stats = services.stats.dashboard().await.unwrap();
        assert_eq!(stats.total_maintenance_cost, Decimal::new(239_98, 2));
    }

    #[tokio::test]
    async fn upcoming_maintenance_counts_next_30_days_including_overdue() {
        let services = services();
        let today = Utc::now().date_naive();

        let mut due_soon = sample_asset("MacBook Pro 16\"");
        due_soon.next_maintenance_date = Some(today + Duration::days(10));
        services.assets.create(due_soon).await.unwrap();

        let mut overdue = sample_asset("Dell XPS 15");
        overdue.next_maintenance_date = Some(today - Duration::days(5));
        services.assets.create(overdue).await.unwrap();

        let mut far_out = sample_asset("HP LaserJet Pro");
        far_out.next_maintenance_date = Some(today + Duration::days(90));
        services.assets.create(far_out).await.unwrap();

        let unscheduled = sample_asset("Office Desk");
        services.assets.create(unscheduled).await.unwrap();

        let stats = services.stats.dashboard().await.unwrap();
        assert_eq!(stats.upcoming_maintenance, 2);
    }
}
