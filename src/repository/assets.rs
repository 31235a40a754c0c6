//! Asset store

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::simulate_latency;
use crate::{
    error::{AppError, AppResult},
    models::{Asset, AssetQuery, AssetStatus, UpdateAsset},
};

/// Asset collection operations. Listing order is insertion order.
#[async_trait]
pub trait AssetsRepository: Send + Sync {
    async fn list(&self, query: &AssetQuery) -> AppResult<Vec<Asset>>;

    /// Distinct asset types in first-seen order
    async fn list_types(&self) -> AppResult<Vec<String>>;

    async fn get(&self, id: Uuid) -> AppResult<Asset>;

    async fn insert(&self, asset: Asset) -> AppResult<Asset>;

    /// Shallow-merge `data` into the asset; NotFound if the id is absent
    async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset>;

    /// Remove the asset; its maintenance and checkout history is not cascaded
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Checkout side effect: status becomes in-use, assignee is set
    async fn assign(&self, id: Uuid, user_id: Uuid) -> AppResult<Asset>;

    /// Check-in side effect: status becomes available, assignee is cleared
    async fn release(&self, id: Uuid) -> AppResult<Asset>;

    /// Maintenance side effect: last maintenance date is set to the record's
    /// date; the next maintenance date is left as-is
    async fn record_maintenance(&self, id: Uuid, date: NaiveDate) -> AppResult<Asset>;
}

pub struct MemoryAssetsRepository {
    latency: Duration,
    assets: RwLock<IndexMap<Uuid, Asset>>,
}

impl MemoryAssetsRepository {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            assets: RwLock::new(IndexMap::new()),
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Asset {} not found", id))
}

#[async_trait]
impl AssetsRepository for MemoryAssetsRepository {
    async fn list(&self, query: &AssetQuery) -> AppResult<Vec<Asset>> {
        simulate_latency(self.latency).await;
        let assets = self.assets.read().await;
        Ok(assets
            .values()
            .filter(|asset| query.matches(asset))
            .cloned()
            .collect())
    }

    async fn list_types(&self) -> AppResult<Vec<String>> {
        simulate_latency(self.latency).await;
        let assets = self.assets.read().await;
        let mut types: Vec<String> = Vec::new();
        for asset in assets.values() {
            if !types.contains(&asset.asset_type) {
                types.push(asset.asset_type.clone());
            }
        }
        Ok(types)
    }

    async fn get(&self, id: Uuid) -> AppResult<Asset> {
        simulate_latency(self.latency).await;
        let assets = self.assets.read().await;
        assets.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn insert(&self, asset: Asset) -> AppResult<Asset> {
        simulate_latency(self.latency).await;
        let mut assets = self.assets.write().await;
        assets.insert(asset.id, asset.clone());
        Ok(asset)
    }

    async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset> {
        simulate_latency(self.latency).await;
        let mut assets = self.assets.write().await;
        let asset = assets.get_mut(&id).ok_or_else(|| not_found(id))?;
        data.apply(asset);
        Ok(asset.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        simulate_latency(self.latency).await;
        let mut assets = self.assets.write().await;
        // shift_remove keeps the remaining assets in insertion order
        assets.shift_remove(&id).ok_or_else(|| not_found(id))?;
        Ok(())
    }

    async fn assign(&self, id: Uuid, user_id: Uuid) -> AppResult<Asset> {
        simulate_latency(self.latency).await;
        let mut assets = self.assets.write().await;
        let asset = assets.get_mut(&id).ok_or_else(|| not_found(id))?;
        asset.status = AssetStatus::InUse;
        asset.assigned_to = Some(user_id);
        Ok(asset.clone())
    }

    async fn release(&self, id: Uuid) -> AppResult<Asset> {
        simulate_latency(self.latency).await;
        let mut assets = self.assets.write().await;
        let asset = assets.get_mut(&id).ok_or_else(|| not_found(id))?;
        asset.status = AssetStatus::Available;
        asset.assigned_to = None;
        Ok(asset.clone())
    }

    async fn record_maintenance(&self, id: Uuid, date: NaiveDate) -> AppResult<Asset> {
        simulate_latency(self.latency).await;
        let mut assets = self.assets.write().await;
        let asset = assets.get_mut(&id).ok_or_else(|| not_found(id))?;
        asset.last_maintenance_date = Some(date);
        Ok(asset.clone())
    }
}
