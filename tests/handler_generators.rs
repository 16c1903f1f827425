mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use dev_utility_hub::api::handlers::{password_handler, qrcode_handler, time_handler, uuid_handler};
use std::collections::HashSet;

fn server() -> TestServer {
    let app = Router::new()
        .route("/api/uuid", get(uuid_handler))
        .route("/api/password", get(password_handler))
        .route("/api/qrcode", get(qrcode_handler))
        .route("/api/time", get(time_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_uuid_default_count() {
    let response = server().get("/api/uuid").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["uuids"].as_array().unwrap().len(), 1);
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_uuid_count_distinct() {
    let response = server().get("/api/uuid").add_query_param("count", 250).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let uuids: Vec<&str> = json["uuids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    let unique: HashSet<_> = uuids.iter().collect();

    assert_eq!(uuids.len(), 250);
    assert_eq!(unique.len(), 250);
    assert!(uuids.iter().all(|id| uuid::Uuid::parse_str(id).is_ok()));
}

#[tokio::test]
async fn test_uuid_garbage_count_coerced() {
    let response = server().get("/api/uuid?count=lots").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["uuids"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_uuid_negative_count_is_empty() {
    let response = server().get("/api/uuid?count=-4").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["uuids"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_password_length_and_strength() {
    let response = server().get("/api/password?length=20").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let password = json["password"].as_str().unwrap();
    assert_eq!(password.len(), 20);
    assert_eq!(json["length"], 20);
    assert_eq!(json["strength"], "Very Strong");
    assert!(
        password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!@#$%^&*".contains(c))
    );
}

#[tokio::test]
async fn test_password_weak() {
    let json = server()
        .get("/api/password?length=6")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["password"].as_str().unwrap().len(), 6);
    assert_eq!(json["strength"], "Weak");
}

#[tokio::test]
async fn test_password_default_length() {
    let json = server()
        .get("/api/password")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["length"], 12);
    assert_eq!(json["strength"], "Strong");
}

#[tokio::test]
async fn test_qrcode_returns_png() {
    let response = server()
        .get("/api/qrcode")
        .add_query_param("text", "https://example.com")
        .add_query_param("size", 150)
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");

    let bytes = response.as_bytes();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_qrcode_negative_size_not_rejected() {
    let response = server().get("/api/qrcode?size=-10").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
}

#[tokio::test]
async fn test_time_fields() {
    let response = server().get("/api/time").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["unix"].as_i64().unwrap() > 1_700_000_000);
    assert!(json["iso"].as_str().unwrap().ends_with('Z'));
    assert!(json["utc"].as_str().unwrap().ends_with("GMT"));
    assert!(json["local"].is_string());
    assert!(json["formatted"].is_string());
}
