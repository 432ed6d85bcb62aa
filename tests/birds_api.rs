use axum::{body::Bytes, http::StatusCode};
use axum_test::TestServer;
use birdshop::{
    app::birds::seed::{seed_birds, SAMPLE_BIRDS},
    build_router,
    core::error::ErrorResponse,
    infrastructure::{
        config::{DatabaseConfig, SeedPolicy},
        database::DatabaseManager,
    },
    AppState, Bird, SqlBirdRepository,
};
use serde_json::json;
use std::time::Duration;

async fn create_test_server(policy: SeedPolicy) -> TestServer {
    let database = DatabaseManager::new(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    database.init_schema().await.expect("Failed to create tables");

    let repository = SqlBirdRepository::new(database.get_pool().clone());
    seed_birds(&repository, policy).await.expect("Failed to seed");

    let app = build_router(AppState::new(repository), Duration::from_secs(5));
    TestServer::new(app).unwrap()
}

fn robin() -> serde_json::Value {
    json!({
        "name": "Robin",
        "description": "Red-breasted songbird",
        "price": 24.5,
        "imagePath": "./images/robin.jpg"
    })
}

#[tokio::test]
async fn test_list_returns_seeded_birds() {
    let server = create_test_server(SeedPolicy::IfEmpty).await;

    let response = server.get("/api/birds").await;
    response.assert_status_ok();

    let birds: Vec<Bird> = response.json();
    assert_eq!(birds.len(), SAMPLE_BIRDS.len());

    for (bird, &(name, description, price, image_path)) in birds.iter().zip(SAMPLE_BIRDS.iter()) {
        assert!(bird.id.is_some());
        assert_eq!(bird.name, name);
        assert_eq!(bird.description, description);
        assert_eq!(bird.price, price);
        assert_eq!(bird.image_path, image_path);
    }
}

#[tokio::test]
async fn test_list_serializes_all_fields() {
    let server = create_test_server(SeedPolicy::IfEmpty).await;

    let body: serde_json::Value = server.get("/api/birds").await.json();
    let first = &body[0];

    assert!(first["id"].is_i64());
    assert_eq!(first["name"], "Blue Jay");
    assert_eq!(first["description"], "Beautiful Blue Jay with vibrant colors");
    assert_eq!(first["price"], 1999.99);
    assert_eq!(first["imagePath"], "./images/blue-jay.jpg");
}

#[tokio::test]
async fn test_list_on_empty_store() {
    let server = create_test_server(SeedPolicy::Never).await;

    let response = server.get("/api/birds").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_create_returns_saved_bird() {
    let server = create_test_server(SeedPolicy::IfEmpty).await;
    let existing: Vec<Bird> = server.get("/api/birds").await.json();

    let response = server.post("/api/birds").json(&robin()).await;
    response.assert_status(StatusCode::CREATED);

    let created: Bird = response.json();
    assert_eq!(created.name, "Robin");
    assert_eq!(created.description, "Red-breasted songbird");
    assert_eq!(created.price, 24.5);
    assert_eq!(created.image_path, "./images/robin.jpg");

    let id = created.id.expect("id should be assigned");
    assert!(existing.iter().all(|b| b.id != Some(id)));
}

#[tokio::test]
async fn test_list_includes_created_bird() {
    let server = create_test_server(SeedPolicy::IfEmpty).await;

    let created: Bird = server.post("/api/birds").json(&robin()).await.json();
    let birds: Vec<Bird> = server.get("/api/birds").await.json();

    assert_eq!(birds.len(), SAMPLE_BIRDS.len() + 1);
    assert!(birds.contains(&created));
}

#[tokio::test]
async fn test_client_id_cannot_overwrite_existing_bird() {
    let server = create_test_server(SeedPolicy::IfEmpty).await;
    let before: Vec<Bird> = server.get("/api/birds").await.json();
    let target = before[0].clone();

    let mut payload = robin();
    payload["id"] = json!(target.id);

    let response = server.post("/api/birds").json(&payload).await;
    response.assert_status(StatusCode::CREATED);

    let created: Bird = response.json();
    assert_ne!(created.id, target.id);

    let after: Vec<Bird> = server.get("/api/birds").await.json();
    assert_eq!(after.len(), before.len() + 1);
    assert!(after.contains(&target));
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let server = create_test_server(SeedPolicy::IfEmpty).await;

    let response = server
        .post("/api/birds")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"name\": \"Robin\""))
        .await;
    assert!(response.status_code().is_client_error());

    let error: ErrorResponse = response.json();
    assert_eq!(error.error, "BAD_REQUEST");
    assert_eq!(error.code, 400);

    let birds: Vec<Bird> = server.get("/api/birds").await.json();
    assert_eq!(birds.len(), SAMPLE_BIRDS.len());
}

#[tokio::test]
async fn test_non_numeric_price_is_rejected() {
    let server = create_test_server(SeedPolicy::IfEmpty).await;

    let mut payload = robin();
    payload["price"] = json!("cheap");

    let response = server.post("/api/birds").json(&payload).await;
    assert!(response.status_code().is_client_error());

    let birds: Vec<Bird> = server.get("/api/birds").await.json();
    assert_eq!(birds.len(), SAMPLE_BIRDS.len());
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let server = create_test_server(SeedPolicy::Never).await;

    let response = server
        .post("/api/birds")
        .json(&json!({ "name": "Robin", "price": 1.0 }))
        .await;
    assert!(response.status_code().is_client_error());

    server.get("/api/birds").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    let server = create_test_server(SeedPolicy::Never).await;

    let mut payload = robin();
    payload["price"] = json!(-1.0);

    let response = server.post("/api/birds").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let error: ErrorResponse = response.json();
    assert_eq!(error.error, "VALIDATION_ERROR");

    server.get("/api/birds").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(SeedPolicy::IfEmpty).await;

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["birds"], 6);
}

#[tokio::test]
async fn test_request_id_header() {
    let server = create_test_server(SeedPolicy::Never).await;

    let response = server.get("/api/birds").await;
    let generated = response.header("x-request-id");
    assert!(!generated.is_empty());

    let response = server
        .get("/api/birds")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static("abc-123"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "abc-123");
}
