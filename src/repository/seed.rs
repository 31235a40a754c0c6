//! Demo inventory seeded at startup when `store.seed_demo_data` is set

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::Repository;
use crate::{
    error::AppResult,
    models::{
        Asset, AssetStatus, Checkout, CreateAsset, CreateCheckout, CreateMaintenanceRecord,
        CreateUser, MaintenanceRecord, MaintenanceType, User, UserRole,
    },
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Populate the stores with a small demo inventory: three users, a handful
/// of assets across every status, a maintenance history and open checkouts
/// backing the in-use assets.
pub async fn seed_demo_data(repository: &Repository) -> AppResult<()> {
    let admin = repository
        .users
        .insert(User::create(CreateUser {
            email: "admin@example.com".into(),
            first_name: "Admin".into(),
            last_name: "User".into(),
            role: UserRole::Admin,
        }))
        .await?;
    let manager = repository
        .users
        .insert(User::create(CreateUser {
            email: "manager@example.com".into(),
            first_name: "Manager".into(),
            last_name: "User".into(),
            role: UserRole::Manager,
        }))
        .await?;
    let regular = repository
        .users
        .insert(User::create(CreateUser {
            email: "user@example.com".into(),
            first_name: "Regular".into(),
            last_name: "User".into(),
            role: UserRole::User,
        }))
        .await?;

    let macbook = repository
        .assets
        .insert(Asset::create(CreateAsset {
            name: "MacBook Pro 16\"".into(),
            asset_type: "Laptop".into(),
            status: AssetStatus::Available,
            purchase_date: date(2023, 1, 15),
            purchase_cost: Decimal::new(2_499_99, 2),
            assigned_to: None,
            location: "Main Office".into(),
            description: Some("16-inch MacBook Pro with M1 Pro chip".into()),
            serial_number: Some("MBPR1612345".into()),
            warranty_expiry_date: Some(date(2025, 1, 15)),
            last_maintenance_date: Some(date(2023, 7, 20)),
            next_maintenance_date: Some(date(2023, 10, 20)),
        }))
        .await?;
    let xps = repository
        .assets
        .insert(Asset::create(CreateAsset {
            name: "Dell XPS 15".into(),
            asset_type: "Laptop".into(),
            status: AssetStatus::Available,
            purchase_date: date(2022, 11, 5),
            purchase_cost: Decimal::new(1_899_99, 2),
            assigned_to: None,
            location: "Storage Room".into(),
            description: Some("15-inch Dell XPS with Intel i9".into()),
            serial_number: Some("DX1567890".into()),
            warranty_expiry_date: Some(date(2024, 11, 5)),
            last_maintenance_date: Some(date(2023, 6, 10)),
            next_maintenance_date: Some(date(2023, 9, 10)),
        }))
        .await?;
    let printer = repository
        .assets
        .insert(Asset::create(CreateAsset {
            name: "HP LaserJet Pro".into(),
            asset_type: "Printer".into(),
            status: AssetStatus::Maintenance,
            purchase_date: date(2022, 5, 20),
            purchase_cost: Decimal::new(399_99, 2),
            assigned_to: None,
            location: "Marketing Department".into(),
            description: Some("Color laser printer".into()),
            serial_number: Some("HPLP98765".into()),
            warranty_expiry_date: Some(date(2024, 5, 20)),
            last_maintenance_date: Some(date(2023, 8, 5)),
            next_maintenance_date: Some(date(2023, 11, 5)),
        }))
        .await?;
    let iphone = repository
        .assets
        .insert(Asset::create(CreateAsset {
            name: "iPhone 14 Pro".into(),
            asset_type: "Mobile Device".into(),
            status: AssetStatus::Available,
            purchase_date: date(2023, 3, 10),
            purchase_cost: Decimal::new(1_099_99, 2),
            assigned_to: None,
            location: "Field Office".into(),
            description: Some("256GB iPhone 14 Pro".into()),
            serial_number: Some("IP14P54321".into()),
            warranty_expiry_date: Some(date(2024, 3, 10)),
            last_maintenance_date: Some(date(2023, 6, 15)),
            next_maintenance_date: Some(date(2023, 9, 15)),
        }))
        .await?;
    repository
        .assets
        .insert(Asset::create(CreateAsset {
            name: "Logitech Conference System".into(),
            asset_type: "Conference Equipment".into(),
            status: AssetStatus::Available,
            purchase_date: date(2022, 9, 15),
            purchase_cost: Decimal::new(799_99, 2),
            assigned_to: None,
            location: "Conference Room A".into(),
            description: Some("Complete conference room audio system".into()),
            serial_number: Some("LCS12345".into()),
            warranty_expiry_date: Some(date(2024, 9, 15)),
            last_maintenance_date: Some(date(2023, 5, 20)),
            next_maintenance_date: Some(date(2023, 8, 20)),
        }))
        .await?;
    repository
        .assets
        .insert(Asset::create(CreateAsset {
            name: "Projector".into(),
            asset_type: "Presentation Equipment".into(),
            status: AssetStatus::Retired,
            purchase_date: date(2018, 6, 15),
            purchase_cost: Decimal::new(599_99, 2),
            assigned_to: None,
            location: "Storage Room".into(),
            description: Some("4K DLP projector".into()),
            serial_number: Some("PRJ56789".into()),
            warranty_expiry_date: Some(date(2020, 6, 15)),
            last_maintenance_date: Some(date(2021, 10, 10)),
            next_maintenance_date: None,
        }))
        .await?;

    // Maintenance history
    for record in [
        CreateMaintenanceRecord {
            asset_id: macbook.id,
            maintenance_type: MaintenanceType::Preventive,
            maintenance_date: date(2023, 7, 20),
            performed_by: "TechSupport Team".into(),
            cost: Decimal::new(49_99, 2),
            description: "Regular software update and hardware inspection".into(),
            notes: Some("No issues found".into()),
        },
        CreateMaintenanceRecord {
            asset_id: printer.id,
            maintenance_type: MaintenanceType::Corrective,
            maintenance_date: date(2023, 8, 5),
            performed_by: "HP Service Center".into(),
            cost: Decimal::new(189_99, 2),
            description: "Fixed paper jam issue and replaced toner".into(),
            notes: Some("Device needed thorough cleaning".into()),
        },
        CreateMaintenanceRecord {
            asset_id: iphone.id,
            maintenance_type: MaintenanceType::Preventive,
            maintenance_date: date(2023, 6, 15),
            performed_by: "IT Department".into(),
            cost: Decimal::new(29_99, 2),
            description: "iOS update and security check".into(),
            notes: Some("Recommended screen protector replacement".into()),
        },
    ] {
        repository
            .maintenance
            .insert(MaintenanceRecord::create(record))
            .await?;
    }

    // Open checkouts backing the in-use assets
    let now = Utc::now();
    for (asset_id, user_id, notes) in [
        (macbook.id, regular.id, "Assigned for project work"),
        (iphone.id, manager.id, "For client meetings and field work"),
    ] {
        repository
            .checkouts
            .insert(Checkout::create(CreateCheckout {
                asset_id,
                user_id,
                checkout_date: Some(now - Duration::days(30)),
                expected_return_date: Some((now + Duration::days(335)).date_naive()),
                notes: Some(notes.into()),
            }))
            .await?;
        repository.assets.assign(asset_id, user_id).await?;
    }

    // One returned checkout so the history view has a closed entry
    let returned = repository
        .checkouts
        .insert(Checkout::create(CreateCheckout {
            asset_id: xps.id,
            user_id: admin.id,
            checkout_date: Some(now - Duration::days(120)),
            expected_return_date: Some((now - Duration::days(60)).date_naive()),
            notes: Some("Loaner during onboarding".into()),
        }))
        .await?;
    repository
        .checkouts
        .close(returned.id, now - Duration::days(63))
        .await?;

    tracing::info!("Seeded demo inventory");
    Ok(())
}
