use serde_json::json;
use std::time::Duration;
use vastdime_web::domain::errors::RegistrationError;
use vastdime_web::domain::ports::RegistrationBackend;
use vastdime_web::infrastructure::backend::HttpRegistrationBackend;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(server: &MockServer) -> HttpRegistrationBackend {
    HttpRegistrationBackend::new(format!("{}/", server.uri()), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_register_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "email": "alice@example.com",
            "username": "foo_bar1",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let result = backend(&server)
        .register("alice@example.com", "foo_bar1", "secret123")
        .await;

    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn test_register_maps_structured_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"error": {"code": "username-taken"}})),
        )
        .mount(&server)
        .await;

    let result = backend(&server)
        .register("alice@example.com", "alice", "secret123")
        .await;

    assert_eq!(result, Err(RegistrationError::UsernameTaken));
}

#[tokio::test]
async fn test_register_maps_legacy_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": {"message": "Email is already in use"}})),
        )
        .mount(&server)
        .await;

    let result = backend(&server)
        .register("alice@example.com", "alice", "secret123")
        .await;

    assert_eq!(result, Err(RegistrationError::EmailInUse));
}

#[tokio::test]
async fn test_register_maps_flat_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "auth/weak-password"})),
        )
        .mount(&server)
        .await;

    let result = backend(&server)
        .register("alice@example.com", "alice", "secret")
        .await;

    assert_eq!(result, Err(RegistrationError::WeakPassword));
}

#[tokio::test]
async fn test_register_server_error_is_unclassified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let result = backend(&server)
        .register("alice@example.com", "alice", "secret123")
        .await;

    assert!(
        matches!(result, Err(RegistrationError::Unclassified(ref d)) if d.contains("database unavailable"))
    );
}

#[tokio::test]
async fn test_register_unreachable_backend_is_unclassified() {
    let backend =
        HttpRegistrationBackend::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();

    let result = backend
        .register("alice@example.com", "alice", "secret123")
        .await;

    assert!(matches!(result, Err(RegistrationError::Unclassified(_))));
}
