//! Checkout and check-in endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Checkout, CreateCheckout},
};

/// Checkout history for an asset
#[utoipa::path(
    get,
    path = "/assets/{id}/checkouts",
    tag = "checkouts",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Checkout history, oldest first", body = Vec<Checkout>),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn list_asset_checkouts(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Checkout>>> {
    let checkouts = state.services.checkouts.history(id).await?;
    Ok(Json(checkouts))
}

/// Check an asset out to a user
#[utoipa::path(
    post,
    path = "/checkouts",
    tag = "checkouts",
    request_body = CreateCheckout,
    responses(
        (status = 201, description = "Asset checked out", body = Checkout),
        (status = 404, description = "Asset or user not found")
    )
)]
pub async fn create_checkout(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCheckout>,
) -> AppResult<(StatusCode, Json<Checkout>)> {
    let checkout = state.services.checkouts.checkout(data).await?;
    Ok((StatusCode::CREATED, Json(checkout)))
}

/// Return a checked-out asset
#[utoipa::path(
    post,
    path = "/assets/{id}/checkin",
    tag = "checkouts",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset checked in", body = Checkout),
        (status = 404, description = "Asset not found or no active checkout")
    )
)]
pub async fn checkin_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Checkout>> {
    let checkout = state.services.checkouts.checkin(id).await?;
    Ok(Json(checkout))
}
