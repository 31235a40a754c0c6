//! API integration tests
//!
//! These run against a live server started separately:
//! `cargo run`, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Create an asset and return its JSON representation
async fn create_asset(client: &Client, name: &str) -> Value {
    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "name": name,
            "asset_type": "Laptop",
            "purchase_date": "2023-01-15",
            "purchase_cost": "2499.99",
            "location": "Main Office",
            "serial_number": "MBPR1612345"
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_assets() {
    let client = Client::new();

    let response = client
        .get(format!("{}/assets", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_asset() {
    let client = Client::new();

    let created = create_asset(&client, "Test Laptop").await;
    let asset_id = created["id"].as_str().expect("No asset ID").to_string();
    assert_eq!(created["status"], "available");

    let response = client
        .delete(format!("{}/assets/{}", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/assets/{}", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_checkout_and_checkin_lifecycle() {
    let client = Client::new();

    let asset = create_asset(&client, "Lifecycle Laptop").await;
    let asset_id = asset["id"].as_str().expect("No asset ID").to_string();

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "email": format!("lifecycle-{}@example.com", asset_id),
            "first_name": "Lifecycle",
            "last_name": "Tester",
            "role": "user"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let user: Value = response.json().await.expect("Failed to parse response");
    let user_id = user["id"].as_str().expect("No user ID").to_string();

    // Checkout
    let response = client
        .post(format!("{}/checkouts", BASE_URL))
        .json(&json!({
            "asset_id": asset_id,
            "user_id": user_id,
            "notes": "Assigned for project work"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/assets/{}", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "in-use");
    assert_eq!(body["assigned_to"], user_id.as_str());
    assert_eq!(body["assigned_to_name"], "Lifecycle Tester");

    // Check-in
    let response = client
        .post(format!("{}/assets/{}/checkin", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let closed: Value = response.json().await.expect("Failed to parse response");
    assert!(closed["return_date"].is_string());

    let response = client
        .get(format!("{}/assets/{}", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "available");
    assert!(body["assigned_to"].is_null());

    // A second check-in has nothing left to close
    let response = client
        .post(format!("{}/assets/{}/checkin", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_add_maintenance_record() {
    let client = Client::new();

    let asset = create_asset(&client, "Maintained Printer").await;
    let asset_id = asset["id"].as_str().expect("No asset ID").to_string();

    let response = client
        .post(format!("{}/maintenance", BASE_URL))
        .json(&json!({
            "asset_id": asset_id,
            "maintenance_type": "corrective",
            "maintenance_date": "2023-08-05",
            "performed_by": "HP Service Center",
            "cost": "189.99",
            "description": "Fixed paper jam issue and replaced toner"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/assets/{}", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["last_maintenance_date"], "2023-08-05");

    let response = client
        .get(format!("{}/assets/{}/maintenance", BASE_URL, asset_id))
        .send()
        .await
        .expect("Failed to send request");
    let records: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(records.as_array().map(|r| r.len()), Some(1));
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let total = body["total_assets"].as_i64().expect("No total");
    let buckets = body["available_assets"].as_i64().unwrap()
        + body["in_use_assets"].as_i64().unwrap()
        + body["maintenance_assets"].as_i64().unwrap()
        + body["retired_assets"].as_i64().unwrap();
    assert_eq!(total, buckets);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_conflict() {
    let client = Client::new();

    let payload = json!({
        "email": "conflict@example.com",
        "first_name": "First",
        "last_name": "Taker",
        "role": "manager"
    });

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");

    if response.status() == 201 {
        let response = client
            .post(format!("{}/users", BASE_URL))
            .json(&payload)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 409);
    } else {
        // Already seeded by a previous run
        assert_eq!(response.status(), 409);
    }
}
