//! Maintenance log service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{CreateMaintenanceRecord, MaintenanceRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Maintenance records for an asset, oldest first
    pub async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<MaintenanceRecord>> {
        // Verify the asset exists
        self.repository.assets.get(asset_id).await?;
        self.repository.maintenance.list_for_asset(asset_id).await
    }

    /// Append a record and stamp the asset's last maintenance date.
    ///
    /// The asset's next maintenance date is deliberately left untouched;
    /// scheduling the next service is a manual edit.
    pub async fn add(&self, data: CreateMaintenanceRecord) -> AppResult<MaintenanceRecord> {
        data.validate()?;
        self.repository.assets.get(data.asset_id).await?;

        let record = self
            .repository
            .maintenance
            .insert(MaintenanceRecord::create(data))
            .await?;
        self.repository
            .assets
            .record_maintenance(record.asset_id, record.maintenance_date)
            .await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::{
        error::AppError,
        models::MaintenanceType,
        services::testing::{sample_asset, services},
    };

    fn sample_record(asset_id: Uuid) -> CreateMaintenanceRecord {
        CreateMaintenanceRecord {
            asset_id,
            maintenance_type: MaintenanceType::Corrective,
            maintenance_date: NaiveDate::from_ymd_opt(2023, 8, 5).unwrap(),
            performed_by: "HP Service Center".to_string(),
            cost: Decimal::new(189_99, 2),
            description: "Fixed paper jam issue and replaced toner".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn add_stamps_last_maintenance_date_and_appears_in_listing() {
        let services = services();
        let asset = services
            .assets
            .create(sample_asset("HP LaserJet Pro"))
            .await
            .unwrap();
        assert_eq!(asset.last_maintenance_date, None);
        let next_before = asset.next_maintenance_date;

        let record = services.maintenance.add(sample_record(asset.id)).await.unwrap();

        let details = services.assets.get(asset.id).await.unwrap();
        assert_eq!(
            details.asset.last_maintenance_date,
            Some(record.maintenance_date)
        );
        // Next maintenance date is not recomputed
        assert_eq!(details.asset.next_maintenance_date, next_before);

        let records = services.maintenance.list_for_asset(asset.id).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, record.id);
    }

    #[tokio::test]
    async fn add_for_unknown_asset_fails_not_found() {
        let services = services();
        let result = services.maintenance.add(sample_record(Uuid::new_v4())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
