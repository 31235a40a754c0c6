//! Asset model and related types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::AssetStatus;

/// Asset record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    /// Free-form category, e.g. "Laptop", "Printer"
    pub asset_type: String,
    pub status: AssetStatus,
    pub purchase_date: NaiveDate,
    pub purchase_cost: Decimal,
    /// User the asset is assigned to while checked out
    pub assigned_to: Option<Uuid>,
    pub location: String,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Asset {
    /// Build a new asset from a create request, assigning id and timestamp
    pub fn create(data: CreateAsset) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            asset_type: data.asset_type,
            status: data.status,
            purchase_date: data.purchase_date,
            purchase_cost: data.purchase_cost,
            assigned_to: data.assigned_to,
            location: data.location,
            description: data.description,
            serial_number: data.serial_number,
            warranty_expiry_date: data.warranty_expiry_date,
            last_maintenance_date: data.last_maintenance_date,
            next_maintenance_date: data.next_maintenance_date,
            created_at: Utc::now(),
        }
    }
}

/// Asset with the assignee name resolved for display.
/// The name is joined against the user collection at read time, never stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssetDetails {
    #[serde(flatten)]
    pub asset: Asset,
    pub assigned_to_name: Option<String>,
}

/// Create asset request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAsset {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "asset_type must not be empty"))]
    pub asset_type: String,
    #[serde(default = "default_status")]
    pub status: AssetStatus,
    pub purchase_date: NaiveDate,
    pub purchase_cost: Decimal,
    pub assigned_to: Option<Uuid>,
    pub location: String,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
}

fn default_status() -> AssetStatus {
    AssetStatus::Available
}

/// Update asset request; absent fields are left untouched
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub asset_type: Option<String>,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub assigned_to: Option<Uuid>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
}

impl UpdateAsset {
    /// Shallow-merge the present fields into an existing asset
    pub fn apply(&self, asset: &mut Asset) {
        macro_rules! merge {
            ($field:ident) => {
                if let Some(value) = self.$field.clone() {
                    asset.$field = value;
                }
            };
            (optional $field:ident) => {
                if let Some(value) = self.$field.clone() {
                    asset.$field = Some(value);
                }
            };
        }

        merge!(name);
        merge!(asset_type);
        merge!(status);
        merge!(purchase_date);
        merge!(purchase_cost);
        merge!(optional assigned_to);
        merge!(location);
        merge!(optional description);
        merge!(optional serial_number);
        merge!(optional warranty_expiry_date);
        merge!(optional last_maintenance_date);
        merge!(optional next_maintenance_date);
    }
}

/// Filters for listing assets
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
pub struct AssetQuery {
    /// Exact status match
    pub status: Option<AssetStatus>,
    /// Exact type match
    pub asset_type: Option<String>,
    /// Case-insensitive substring match on name, serial number and description
    pub search: Option<String>,
}

impl AssetQuery {
    /// Whether an asset passes all active filters
    pub fn matches(&self, asset: &Asset) -> bool {
        if let Some(status) = self.status {
            if asset.status != status {
                return false;
            }
        }
        if let Some(ref asset_type) = self.asset_type {
            if &asset.asset_type != asset_type {
                return false;
            }
        }
        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            let hit = asset.name.to_lowercase().contains(&needle)
                || asset
                    .serial_number
                    .as_ref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
                || asset
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        true
    }
}
