//! Checkout model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Checkout record; an absent `return_date` means the asset is still out
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Checkout {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub user_id: Uuid,
    pub checkout_date: DateTime<Utc>,
    pub expected_return_date: Option<NaiveDate>,
    pub return_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Checkout {
    /// Build a new checkout from a create request, assigning id and timestamp
    pub fn create(data: CreateCheckout) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            asset_id: data.asset_id,
            user_id: data.user_id,
            checkout_date: data.checkout_date.unwrap_or(now),
            expected_return_date: data.expected_return_date,
            return_date: None,
            notes: data.notes,
            created_at: now,
        }
    }

    /// Whether the asset is still out under this checkout
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Checkout request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCheckout {
    pub asset_id: Uuid,
    pub user_id: Uuid,
    /// Defaults to the current time
    pub checkout_date: Option<DateTime<Utc>>,
    pub expected_return_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
