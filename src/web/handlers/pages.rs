//! Page handlers for the route table.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Code editor, the public landing page.
#[derive(Template, WebTemplate)]
#[template(path = "editor.html")]
pub struct EditorTemplate {}

/// Saved programs of the signed-in user.
#[derive(Template, WebTemplate)]
#[template(path = "programs.html")]
pub struct ProgramsTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "user_home.html")]
pub struct UserHomeTemplate {}

/// `GET /`
pub async fn editor_handler() -> impl IntoResponse {
    EditorTemplate {}
}

/// `GET /programs`
///
/// Only reachable through [`crate::web::middleware::web_auth`]. The program
/// list itself is loaded by the browser from the backend API.
pub async fn programs_handler() -> impl IntoResponse {
    ProgramsTemplate {}
}

/// `GET /user-home`, gated like [`programs_handler`].
pub async fn user_home_handler() -> impl IntoResponse {
    UserHomeTemplate {}
}
