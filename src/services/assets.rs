//! Asset management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{Asset, AssetDetails, AssetQuery, CreateAsset, UpdateAsset},
    repository::Repository,
};

#[derive(Clone)]
pub struct AssetsService {
    repository: Repository,
}

impl AssetsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List assets in insertion order, optionally filtered
    pub async fn list(&self, query: &AssetQuery) -> AppResult<Vec<Asset>> {
        self.repository.assets.list(query).await
    }

    /// Distinct asset types in first-seen order
    pub async fn list_types(&self) -> AppResult<Vec<String>> {
        self.repository.assets.list_types().await
    }

    /// Get an asset with its assignee name resolved against the user store
    pub async fn get(&self, id: Uuid) -> AppResult<AssetDetails> {
        let asset = self.repository.assets.get(id).await?;
        let assigned_to_name = match asset.assigned_to {
            Some(user_id) => self
                .repository
                .users
                .find(user_id)
                .await?
                .map(|user| user.display_name()),
            None => None,
        };
        Ok(AssetDetails {
            asset,
            assigned_to_name,
        })
    }

    pub async fn create(&self, data: CreateAsset) -> AppResult<Asset> {
        data.validate()?;
        self.repository.assets.insert(Asset::create(data)).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset> {
        self.repository.assets.update(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.assets.delete(id).await
    }
}
