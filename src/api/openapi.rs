//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assets, checkouts, health, maintenance, stats, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AssetBase API",
        version = "1.0.0",
        description = "Asset Management System REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Assets
        assets::list_assets,
        assets::list_asset_types,
        assets::get_asset,
        assets::create_asset,
        assets::update_asset,
        assets::delete_asset,
        // Checkouts
        checkouts::list_asset_checkouts,
        checkouts::create_checkout,
        checkouts::checkin_asset,
        // Maintenance
        maintenance::list_asset_maintenance,
        maintenance::add_maintenance_record,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Assets
            crate::models::Asset,
            crate::models::AssetDetails,
            crate::models::CreateAsset,
            crate::models::UpdateAsset,
            crate::models::enums::AssetStatus,
            // Checkouts
            crate::models::Checkout,
            crate::models::CreateCheckout,
            // Maintenance
            crate::models::MaintenanceRecord,
            crate::models::CreateMaintenanceRecord,
            crate::models::enums::MaintenanceType,
            // Users
            crate::models::User,
            crate::models::CreateUser,
            crate::models::UpdateUser,
            crate::models::enums::UserRole,
            // Stats
            stats::DashboardStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "assets", description = "Asset registry management"),
        (name = "checkouts", description = "Checkout and check-in lifecycle"),
        (name = "maintenance", description = "Maintenance log"),
        (name = "users", description = "User management"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
