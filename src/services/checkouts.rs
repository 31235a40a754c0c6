//! Checkout and check-in lifecycle service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Checkout, CreateCheckout},
    repository::Repository,
};

#[derive(Clone)]
pub struct CheckoutsService {
    repository: Repository,
}

impl CheckoutsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Checkout history for an asset, oldest first
    pub async fn history(&self, asset_id: Uuid) -> AppResult<Vec<Checkout>> {
        // Verify the asset exists
        self.repository.assets.get(asset_id).await?;
        self.repository.checkouts.list_for_asset(asset_id).await
    }

    /// Check an asset out to a user.
    ///
    /// The asset moves to in-use and the assignee is set. Whether the asset
    /// was available beforehand is not checked; a second checkout simply
    /// layers a newer active record over the first.
    pub async fn checkout(&self, data: CreateCheckout) -> AppResult<Checkout> {
        // Verify both ends of the assignment exist
        self.repository.assets.get(data.asset_id).await?;
        self.repository.users.get(data.user_id).await?;

        let checkout = self.repository.checkouts.insert(Checkout::create(data)).await?;
        self.repository
            .assets
            .assign(checkout.asset_id, checkout.user_id)
            .await?;
        Ok(checkout)
    }

    /// Return a checked-out asset.
    ///
    /// Closes the most recent open checkout and makes the asset available
    /// again with its assignee cleared.
    pub async fn checkin(&self, asset_id: Uuid) -> AppResult<Checkout> {
        self.repository.assets.get(asset_id).await?;

        let active = self
            .repository
            .checkouts
            .find_active(asset_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No active checkout found for asset {}", asset_id))
            })?;

        let closed = self.repository.checkouts.close(active.id, Utc::now()).await?;
        self.repository.assets.release(asset_id).await?;
        Ok(closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::AssetStatus,
        services::testing::{sample_asset, sample_user, services},
    };

    #[tokio::test]
    async fn checkout_sets_status_and_assignee() {
        let services = services();
        let user = services
            .users
            .create(sample_user("user@example.com"))
            .await
            .unwrap();
        let asset = services
            .assets
            .create(sample_asset("MacBook Pro 16\""))
            .await
            .unwrap();

        let checkout = services
            .checkouts
            .checkout(CreateCheckout {
                asset_id: asset.id,
                user_id: user.id,
                checkout_date: None,
                expected_return_date: None,
                notes: Some("Assigned for project work".to_string()),
            })
            .await
            .unwrap();

        assert!(checkout.is_active());

        let details = services.assets.get(asset.id).await.unwrap();
        assert_eq!(details.asset.status, AssetStatus::InUse);
        assert_eq!(details.asset.assigned_to, Some(user.id));
        assert_eq!(details.assigned_to_name.as_deref(), Some("Regular User"));
    }

    #[tokio::test]
    async fn checkin_restores_availability_and_closes_record() {
        let services = services();
        let user = services
            .users
            .create(sample_user("user@example.com"))
            .await
            .unwrap();
        let asset = services
            .assets
            .create(sample_asset("Dell XPS 15"))
            .await
            .unwrap();

        services
            .checkouts
            .checkout(CreateCheckout {
                asset_id: asset.id,
                user_id: user.id,
                checkout_date: None,
                expected_return_date: None,
                notes: None,
            })
            .await
            .unwrap();

        let closed = services.checkouts.checkin(asset.id).await.unwrap();
        assert!(closed.return_date.is_some());

        let details = services.assets.get(asset.id).await.unwrap();
        assert_eq!(details.asset.status, AssetStatus::Available);
        assert_eq!(details.asset.assigned_to, None);
        assert_eq!(details.assigned_to_name, None);

        // The closed record stays in the history
        let history = services.checkouts.history(asset.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].return_date.is_some());
    }

    #[tokio::test]
    async fn checkin_without_active_checkout_fails() {
        let services = services();
        let asset = services
            .assets
            .create(sample_asset("HP LaserJet Pro"))
            .await
            .unwrap();

        let err = services.checkouts.checkin(asset.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("No active checkout"));
    }

    #[tokio::test]
    async fn checkout_unknown_asset_or_user_fails() {
        let services = services();
        let user = services
            .users
            .create(sample_user("user@example.com"))
            .await
            .unwrap();
        let asset = services
            .assets
            .create(sample_asset("iPhone 14 Pro"))
            .await
            .unwrap();

        let unknown_asset = services
            .checkouts
            .checkout(CreateCheckout {
                asset_id: Uuid::new_v4(),
                user_id: user.id,
                checkout_date: None,
                expected_return_date: None,
                notes: None,
            })
            .await;
        assert!(matches!(unknown_asset, Err(AppError::NotFound(_))));

        let unknown_user = services
            .checkouts
            .checkout(CreateCheckout {
                asset_id: asset.id,
                user_id: Uuid::new_v4(),
                checkout_date: None,
                expected_return_date: None,
                notes: None,
            })
            .await;
        assert!(matches!(unknown_user, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn checkin_closes_the_most_recent_open_checkout() {
        let services = services();
        let first = services
            .users
            .create(sample_user("user@example.com"))
            .await
            .unwrap();
        let second = services
            .users
            .create(sample_user("manager@example.com"))
            .await
            .unwrap();
        let asset = services
            .assets
            .create(sample_asset("Office Desk"))
            .await
            .unwrap();

        // Double-checkout is not blocked; two active records pile up
        for user_id in [first.id, second.id] {
            services
                .checkouts
                .checkout(CreateCheckout {
                    asset_id: asset.id,
                    user_id,
                    checkout_date: None,
                    expected_return_date: None,
                    notes: None,
                })
                .await
                .unwrap();
        }

        let closed = services.checkouts.checkin(asset.id).await.unwrap();
        assert_eq!(closed.user_id, second.id);

        let history = services.checkouts.history(asset.id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].is_active());
        assert!(history[1].return_date.is_some());
    }
}
