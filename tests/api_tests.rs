//! API integration tests
//!
//! These tests run against a live server. On a fresh database the server
//! creates the bootstrap admin account from the `[bootstrap]` config section
//! (admin@example.com / admin123 by default). Run with:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated admin token
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@example.com",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Helper to create an asset and return its id
async fn create_test_asset(client: &Client, token: &str, name: &str) -> String {
    let response = client
        .post(format!("{}/assets", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "name": name,
            "asset_type": "Laptop",
            "model": "Test Model"
        }))
        .send()
        .await
        .expect("Failed to create asset");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse asset response");
    body["id"].as_str().expect("No id in response").to_string()
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
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@example.com",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@example.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_register_defaults_to_employee() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "New Employee",
            "email": format!("employee-{}@example.com", uuid_suffix()),
            "password": "password123",
            // Self-registration must not be able to grab the admin role
            "role": "Admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["role"], "Employee");
}

#[tokio::test]
#[ignore]
async fn test_asset_assign_unassign_roundtrip() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let asset_id = create_test_asset(&client, &token, "Assign Roundtrip Laptop").await;

    // Need a user to assign to
    let me: Value = client
        .get(format!("{}/auth/me", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch profile")
        .json()
        .await
        .expect("Failed to parse profile");
    let user_id = me["id"].as_str().expect("No user id");

    let response = client
        .post(format!("{}/assets/{}/assign", BASE_URL, asset_id))
        .bearer_auth(&token)
        .json(&json!({
            "user_id": user_id,
            "due_date": "2031-01-15"
        }))
        .send()
        .await
        .expect("Failed to assign asset");

    assert!(response.status().is_success());
    let asset: Value = response.json().await.expect("Failed to parse asset");
    assert_eq!(asset["status"], "InUse");
    assert_eq!(asset["assigned_to_user"], user_id);
    assert!(asset["assigned_to_team"].is_null());

    let response = client
        .post(format!("{}/assets/{}/unassign", BASE_URL, asset_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to unassign asset");

    assert!(response.status().is_success());
    let asset: Value = response.json().await.expect("Failed to parse asset");
    assert_eq!(asset["status"], "Available");
    assert!(asset["assigned_to_user"].is_null());
    assert!(asset["due_date"].is_null());

    // Unassigning an already-available asset is a no-op, not an error
    let response = client
        .post(format!("{}/assets/{}/unassign", BASE_URL, asset_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to unassign asset again");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_assign_rejects_ambiguous_target() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let asset_id = create_test_asset(&client, &token, "Ambiguous Target Laptop").await;

    // Neither user nor team
    let response = client
        .post(format!("{}/assets/{}/assign", BASE_URL, asset_id))
        .bearer_auth(&token)
        .json(&json!({ "due_date": "2031-01-15" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_assign_rejects_past_due_date() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let asset_id = create_test_asset(&client, &token, "Past Due Laptop").await;

    let me: Value = client
        .get(format!("{}/auth/me", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch profile")
        .json()
        .await
        .expect("Failed to parse profile");

    let response = client
        .post(format!("{}/assets/{}/assign", BASE_URL, asset_id))
        .bearer_auth(&token)
        .json(&json!({
            "user_id": me["id"],
            "due_date": "2020-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_approve_claims_asset() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let asset_id = create_test_asset(&client, &token, "Bookable Projector").await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "asset_id": asset_id,
            "asset_name": "Bookable Projector",
            "start_date": "2031-02-01",
            "end_date": "2031-02-10",
            "purpose": "Quarterly review"
        }))
        .send()
        .await
        .expect("Failed to create booking");

    assert_eq!(response.status(), 201);
    let booking: Value = response.json().await.expect("Failed to parse booking");
    assert_eq!(booking["status"], "Pending");
    let booking_id = booking["id"].as_str().expect("No booking id");

    let response = client
        .post(format!("{}/bookings/{}/approve", BASE_URL, booking_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to approve booking");

    assert!(response.status().is_success());
    let booking: Value = response.json().await.expect("Failed to parse booking");
    assert_eq!(booking["status"], "Approved");

    // The asset is now claimed for the requester
    let asset: Value = client
        .get(format!("{}/assets/{}", BASE_URL, asset_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch asset")
        .json()
        .await
        .expect("Failed to parse asset");
    assert_eq!(asset["status"], "InUse");

    // Approving a non-pending booking is an invalid transition
    let response = client
        .post(format!("{}/bookings/{}/approve", BASE_URL, booking_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_booking_reject_requires_reason() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let asset_id = create_test_asset(&client, &token, "Reject Test Camera").await;

    let booking: Value = client
        .post(format!("{}/bookings", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "asset_id": asset_id,
            "asset_name": "Reject Test Camera",
            "start_date": "2031-03-01",
            "end_date": "2031-03-05",
            "purpose": "Field shoot"
        }))
        .send()
        .await
        .expect("Failed to create booking")
        .json()
        .await
        .expect("Failed to parse booking");
    let booking_id = booking["id"].as_str().expect("No booking id");

    let response = client
        .post(format!("{}/bookings/{}/reject", BASE_URL, booking_id))
        .bearer_auth(&token)
        .json(&json!({ "reason": "   " }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/bookings/{}/reject", BASE_URL, booking_id))
        .bearer_auth(&token)
        .json(&json!({ "reason": "Asset reserved for the launch event" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let booking: Value = response.json().await.expect("Failed to parse booking");
    assert_eq!(booking["status"], "Rejected");
    assert_eq!(booking["rejection_reason"], "Asset reserved for the launch event");
}

#[tokio::test]
#[ignore]
async fn test_booking_cancel_only_while_pending() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let asset_id = create_test_asset(&client, &token, "Cancel Test Monitor").await;

    let booking: Value = client
        .post(format!("{}/bookings", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "asset_id": asset_id,
            "asset_name": "Cancel Test Monitor",
            "start_date": "2031-04-01",
            "end_date": "2031-04-02",
            "purpose": "Temporary workstation"
        }))
        .send()
        .await
        .expect("Failed to create booking")
        .json()
        .await
        .expect("Failed to parse booking");
    let booking_id = booking["id"].as_str().expect("No booking id");

    // Approve, then the creator can no longer cancel
    client
        .post(format!("{}/bookings/{}/approve", BASE_URL, booking_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to approve booking");

    let response = client
        .delete(format!("{}/bookings/{}", BASE_URL, booking_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_maintenance_lifecycle_resets_asset() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let asset_id = create_test_asset(&client, &token, "Broken Printer").await;

    let ticket: Value = client
        .post(format!("{}/maintenance", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "asset_id": asset_id,
            "issue": "Paper feed jams on every job",
            "priority": "High"
        }))
        .send()
        .await
        .expect("Failed to create ticket")
        .json()
        .await
        .expect("Failed to parse ticket");
    assert_eq!(ticket["status"], "Pending");
    let ticket_id = ticket["id"].as_str().expect("No ticket id");

    // Opening a ticket pulls the asset out of service
    let asset: Value = client
        .get(format!("{}/assets/{}", BASE_URL, asset_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch asset")
        .json()
        .await
        .expect("Failed to parse asset");
    assert_eq!(asset["status"], "Maintenance");
    assert_eq!(asset["condition"], "NeedsRepair");

    // Assign a technician (admin doubles as maintenance staff here)
    let me: Value = client
        .get(format!("{}/auth/me", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch profile")
        .json()
        .await
        .expect("Failed to parse profile");

    let response = client
        .post(format!("{}/maintenance/{}/assign", BASE_URL, ticket_id))
        .bearer_auth(&token)
        .json(&json!({ "technician_id": me["id"] }))
        .send()
        .await
        .expect("Failed to assign technician");
    assert!(response.status().is_success());
    let ticket: Value = response.json().await.expect("Failed to parse ticket");
    assert_eq!(ticket["status"], "Assigned");

    let response = client
        .post(format!("{}/maintenance/{}/start", BASE_URL, ticket_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to start ticket");
    assert!(response.status().is_success());
    let ticket: Value = response.json().await.expect("Failed to parse ticket");
    assert_eq!(ticket["status"], "InProgress");

    let response = client
        .post(format!("{}/maintenance/{}/resolve", BASE_URL, ticket_id))
        .bearer_auth(&token)
        .json(&json!({ "resolution": "Replaced the feed rollers" }))
        .send()
        .await
        .expect("Failed to resolve ticket");
    assert!(response.status().is_success());
    let ticket: Value = response.json().await.expect("Failed to parse ticket");
    assert_eq!(ticket["status"], "Resolved");
    assert_eq!(ticket["resolution"], "Replaced the feed rollers");

    // Resolution returns the asset to service
    let asset: Value = client
        .get(format!("{}/assets/{}", BASE_URL, asset_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch asset")
        .json()
        .await
        .expect("Failed to parse asset");
    assert_eq!(asset["status"], "Available");
    assert_eq!(asset["condition"], "Good");

    // Resolved tickets are terminal
    let response = client
        .post(format!("{}/maintenance/{}/resolve", BASE_URL, ticket_id))
        .bearer_auth(&token)
        .json(&json!({ "resolution": "Again" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_employee_can_self_report_ticket() {
    let client = Client::new();
    let admin_token = get_auth_token(&client).await;
    let asset_id = create_test_asset(&client, &admin_token, "Flickering Monitor").await;

    let email = format!("reporter-{}@example.com", uuid_suffix());
    client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Issue Reporter",
            "email": email,
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to register");

    let login: Value = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "password123" }))
        .send()
        .await
        .expect("Failed to login")
        .json()
        .await
        .expect("Failed to parse login");
    let token = login["token"].as_str().expect("No token");

    // An employee may open a ticket against any asset
    let response = client
        .post(format!("{}/maintenance", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "asset_id": asset_id,
            "issue": "Screen flickers after a few minutes"
        }))
        .send()
        .await
        .expect("Failed to create ticket");

    assert_eq!(response.status(), 201);
    let ticket: Value = response.json().await.expect("Failed to parse ticket");
    assert_eq!(ticket["status"], "Pending");
    let ticket_id = ticket["id"].as_str().expect("No ticket id");

    // But the workflow stays with maintenance staff
    let response = client
        .post(format!("{}/maintenance/{}/start", BASE_URL, ticket_id))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    let response = client
        .post(format!("{}/maintenance/{}/resolve", BASE_URL, ticket_id))
        .bearer_auth(token)
        .json(&json!({ "resolution": "It fixed itself" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_team_membership_views_agree() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let team: Value = client
        .post(format!("{}/teams", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "name": format!("QA Team {}", uuid_suffix()) }))
        .send()
        .await
        .expect("Failed to create team")
        .json()
        .await
        .expect("Failed to parse team");
    let team_id = team["id"].as_str().expect("No team id");

    let me: Value = client
        .get(format!("{}/auth/me", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch profile")
        .json()
        .await
        .expect("Failed to parse profile");
    let user_id = me["id"].as_str().expect("No user id");

    let response = client
        .post(format!("{}/teams/{}/members/{}", BASE_URL, team_id, user_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to add member");

    assert!(response.status().is_success());
    let team: Value = response.json().await.expect("Failed to parse team");
    let members: Vec<&str> = team["members"]
        .as_array()
        .expect("No members array")
        .iter()
        .filter_map(|m| m.as_str())
        .collect();
    assert!(members.contains(&user_id));

    // The user side of the relation shows the same membership
    let me: Value = client
        .get(format!("{}/auth/me", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to fetch profile")
        .json()
        .await
        .expect("Failed to parse profile");
    let teams: Vec<&str> = me["teams"]
        .as_array()
        .expect("No teams array")
        .iter()
        .filter_map(|t| t.as_str())
        .collect();
    assert!(teams.contains(&team_id));

    let response = client
        .delete(format!("{}/teams/{}/members/{}", BASE_URL, team_id, user_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to remove member");

    assert!(response.status().is_success());
    let team: Value = response.json().await.expect("Failed to parse team");
    assert!(team["members"].as_array().expect("No members array").is_empty());
}

#[tokio::test]
#[ignore]
async fn test_stats_requires_admin() {
    let client = Client::new();

    let email = format!("viewer-{}@example.com", uuid_suffix());
    client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Stats Viewer",
            "email": email,
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to register");

    let login: Value = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "password123" }))
        .send()
        .await
        .expect("Failed to login")
        .json()
        .await
        .expect("Failed to parse login");
    let token = login["token"].as_str().expect("No token");

    let response = client
        .get(format!("{}/stats/dashboard", BASE_URL))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

/// Unique suffix so repeated test runs do not collide on unique columns
fn uuid_suffix() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
        .to_string()
}
