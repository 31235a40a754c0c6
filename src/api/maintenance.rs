//! Maintenance log endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CreateMaintenanceRecord, MaintenanceRecord},
};

/// Maintenance records for an asset
#[utoipa::path(
    get,
    path = "/assets/{id}/maintenance",
    tag = "maintenance",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Maintenance records, oldest first", body = Vec<MaintenanceRecord>),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn list_asset_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<MaintenanceRecord>>> {
    let records = state.services.maintenance.list_for_asset(id).await?;
    Ok(Json(records))
}

/// Append a maintenance record
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    request_body = CreateMaintenanceRecord,
    responses(
        (status = 201, description = "Record appended", body = MaintenanceRecord),
        (status = 404, description = "Asset not found"),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn add_maintenance_record(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMaintenanceRecord>,
) -> AppResult<(StatusCode, Json<MaintenanceRecord>)> {
    let record = state.services.maintenance.add(data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
