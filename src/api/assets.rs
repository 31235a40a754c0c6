//! Asset endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Asset, AssetDetails, AssetQuery, CreateAsset, UpdateAsset},
};

/// List assets with optional filters
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    params(AssetQuery),
    responses(
        (status = 200, description = "Assets in insertion order", body = Vec<Asset>)
    )
)]
pub async fn list_assets(
    State(state): State<crate::AppState>,
    Query(query): Query<AssetQuery>,
) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.services.assets.list(&query).await?;
    Ok(Json(assets))
}

/// List distinct asset types
#[utoipa::path(
    get,
    path = "/assets/types",
    tag = "assets",
    responses(
        (status = 200, description = "Distinct asset types in first-seen order", body = Vec<String>)
    )
)]
pub async fn list_asset_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<String>>> {
    let types = state.services.assets.list_types().await?;
    Ok(Json(types))
}

/// Get asset details by ID
#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset details with resolved assignee name", body = AssetDetails),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn get_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AssetDetails>> {
    let asset = state.services.assets.get(id).await?;
    Ok(Json(asset))
}

/// Create an asset
#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_asset(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    let asset = state.services.assets.create(data).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Update an asset
#[utoipa::path(
    put,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = Uuid, Path, description = "Asset ID")),
    request_body = UpdateAsset,
    responses(
        (status = 200, description = "Asset updated", body = Asset),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn update_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateAsset>,
) -> AppResult<Json<Asset>> {
    let asset = state.services.assets.update(id, &data).await?;
    Ok(Json(asset))
}

/// Delete an asset
#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn delete_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.assets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
