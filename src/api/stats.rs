//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Dashboard statistics response
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    /// Total number of assets
    pub total_assets: i64,
    /// Assets currently available
    pub available_assets: i64,
    /// Assets checked out
    pub in_use_assets: i64,
    /// Assets under maintenance
    pub maintenance_assets: i64,
    /// Retired assets
    pub retired_assets: i64,
    /// Sum of cost over every maintenance record
    pub total_maintenance_cost: Decimal,
    /// Assets whose next maintenance falls within the next 30 days
    pub upcoming_maintenance: i64,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Registry statistics", body = DashboardStats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.stats.dashboard().await?;
    Ok(Json(stats))
}
