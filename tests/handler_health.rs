mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use vastdime_web::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (state, _backend, _identity) = common::create_test_state();
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
    assert_eq!(json["checks"]["registration_forms"]["status"], "ok");
    assert_eq!(
        json["checks"]["registration_forms"]["message"],
        "Open forms: 0"
    );
}
