//! Checkout store

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::simulate_latency;
use crate::{
    error::{AppError, AppResult},
    models::Checkout,
};

/// Checkout log operations. Records are never deleted; check-in closes the
/// record in place by setting its return date.
#[async_trait]
pub trait CheckoutsRepository: Send + Sync {
    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<Checkout>>;

    async fn insert(&self, checkout: Checkout) -> AppResult<Checkout>;

    /// Most recent checkout of the asset with no return date, if any
    async fn find_active(&self, asset_id: Uuid) -> AppResult<Option<Checkout>>;

    /// Set the return date of a checkout; NotFound if the id is absent
    async fn close(&self, id: Uuid, returned_at: DateTime<Utc>) -> AppResult<Checkout>;
}

pub struct MemoryCheckoutsRepository {
    latency: Duration,
    checkouts: RwLock<IndexMap<Uuid, Checkout>>,
}

impl MemoryCheckoutsRepository {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            checkouts: RwLock::new(IndexMap::new()),
        }
    }
}

#[async_trait]
impl CheckoutsRepository for MemoryCheckoutsRepository {
    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<Checkout>> {
        simulate_latency(self.latency).await;
        let checkouts = self.checkouts.read().await;
        Ok(checkouts
            .values()
            .filter(|checkout| checkout.asset_id == asset_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, checkout: Checkout) -> AppResult<Checkout> {
        simulate_latency(self.latency).await;
        let mut checkouts = self.checkouts.write().await;
        checkouts.insert(checkout.id, checkout.clone());
        Ok(checkout)
    }

    async fn find_active(&self, asset_id: Uuid) -> AppResult<Option<Checkout>> {
        simulate_latency(self.latency).await;
        let checkouts = self.checkouts.read().await;
        Ok(checkouts
            .values()
            .rev()
            .find(|checkout| checkout.asset_id == asset_id && checkout.is_active())
            .cloned())
    }

    async fn close(&self, id: Uuid, returned_at: DateTime<Utc>) -> AppResult<Checkout> {
        simulate_latency(self.latency).await;
        let mut checkouts = self.checkouts.write().await;
        let checkout = checkouts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Checkout {} not found", id)))?;
        checkout.return_date = Some(returned_at);
        Ok(checkout.clone())
    }
}
