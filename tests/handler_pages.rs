mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use vastdime_web::web::routes::router;

fn server() -> (TestServer, std::sync::Arc<common::FakeIdentity>) {
    let (state, _backend, identity) = common::create_test_state();
    (TestServer::new(router(state)).unwrap(), identity)
}

#[tokio::test]
async fn test_editor_is_public() {
    let (server, _) = server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Editor"));
}

#[tokio::test]
async fn test_programs_without_cookie_redirects_to_root() {
    let (server, _) = server();

    let response = server.get("/programs").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_programs_with_valid_session() {
    let (server, _) = server();

    let response = server
        .get("/programs")
        .add_header("Cookie", "theme=dark; session_token=valid-token")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Saved programs"));
}

#[tokio::test]
async fn test_user_home_with_valid_session() {
    let (server, _) = server();

    let response = server
        .get("/user-home")
        .add_header("Cookie", "session_token=valid-token")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Welcome back"));
}

#[tokio::test]
async fn test_user_home_with_rejected_session() {
    let (server, _) = server();

    let response = server
        .get("/user-home")
        .add_header("Cookie", "session_token=expired-token")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_provider_outage_counts_as_signed_out() {
    let (server, identity) = server();
    identity.go_down();

    let response = server
        .get("/programs")
        .add_header("Cookie", "session_token=valid-token")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_unknown_path_redirects_to_root() {
    let (server, _) = server();

    let response = server.get("/nonexistent").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_nested_unknown_path_redirects_to_root() {
    let (server, _) = server();

    let response = server
        .get("/programs/42")
        .add_header("Cookie", "session_token=valid-token")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}
