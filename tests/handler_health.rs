mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use healthcare_api::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::default_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["email"]["status"], "ok");
    assert_eq!(json["checks"]["email"]["message"], "Transport: recording");
    assert_eq!(json["checks"]["ai"]["message"], "Provider: stub");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = common::default_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("email").is_some());
    assert!(json["checks"].get("ai").is_some());
}
