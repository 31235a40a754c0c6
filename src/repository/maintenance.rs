//! Maintenance record store

use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::simulate_latency;
use crate::{error::AppResult, models::MaintenanceRecord};

/// Maintenance log operations. Records are append-only and immutable.
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<MaintenanceRecord>>;

    async fn insert(&self, record: MaintenanceRecord) -> AppResult<MaintenanceRecord>;

    /// Sum of `cost` over every record in the log
    async fn total_cost(&self) -> AppResult<Decimal>;
}

pub struct MemoryMaintenanceRepository {
    latency: Duration,
    records: RwLock<IndexMap<Uuid, MaintenanceRecord>>,
}

impl MemoryMaintenanceRepository {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            records: RwLock::new(IndexMap::new()),
        }
    }
}

#[async_trait]
impl MaintenanceRepository for MemoryMaintenanceRepository {
    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<MaintenanceRecord>> {
        simulate_latency(self.latency).await;
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|record| record.asset_id == asset_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, record: MaintenanceRecord) -> AppResult<MaintenanceRecord> {
        simulate_latency(self.latency).await;
        let mut records = self.records.write().await;
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn total_cost(&self) -> AppResult<Decimal> {
        simulate_latency(self.latency).await;
        let records = self.records.read().await;
        Ok(records.values().map(|record| record.cost).sum())
    }
}
