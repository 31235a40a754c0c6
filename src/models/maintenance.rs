//! Maintenance record model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::MaintenanceType;

/// Immutable log entry describing service performed on an asset
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: NaiveDate,
    pub performed_by: String,
    pub cost: Decimal,
    pub description: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceRecord {
    /// Build a new record from a create request, assigning id and timestamp
    pub fn create(data: CreateMaintenanceRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_id: data.asset_id,
            maintenance_type: data.maintenance_type,
            maintenance_date: data.maintenance_date,
            performed_by: data.performed_by,
            cost: data.cost,
            description: data.description,
            notes: data.notes,
            created_at: Utc::now(),
        }
    }
}

/// Create maintenance record request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenanceRecord {
    pub asset_id: Uuid,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: NaiveDate,
    #[validate(length(min = 1, message = "performed_by must not be empty"))]
    pub performed_by: String,
    pub cost: Decimal,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub notes: Option<String>,
}
