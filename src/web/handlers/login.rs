//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::errors::IdentityError;
use crate::state::AppState;
use crate::utils::cookies::{clear_session_cookie, session_cookie};
use crate::web::route_table::{Page, ROOT, ROUTES};

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
const SIGN_IN_UNAVAILABLE_MESSAGE: &str = "Sign-in is unavailable. Please try again later";

/// Template for the login page.
///
/// Renders `templates/login.html` with the email echoed back and an
/// optional error line.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {
        email: String::new(),
        error: None,
    }
}

/// Signs in and installs the session cookie.
///
/// # Endpoint
///
/// `POST /login` (form-encoded `email`, `password`)
///
/// On success the id token is stored in the `session_token` cookie for the
/// session's remaining lifetime and the browser is sent to the user home
/// page. Rejected credentials re-render the page with `401`, provider
/// failures with `502`.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> Response {
    match state.identity.sign_in(&input.email, &input.password).await {
        Ok(session) => {
            info!(email = %session.email, "Signed in");
            let cookie = session_cookie(
                session.id_token.clone(),
                session.remaining_seconds(Utc::now()),
                state.secure_cookies,
            );
            (jar.add(cookie), Redirect::to(&home_url())).into_response()
        }
        Err(e) => {
            let (status, message) = match e {
                IdentityError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS_MESSAGE)
                }
                other => {
                    warn!(error = %other, "Sign-in failed");
                    (StatusCode::BAD_GATEWAY, SIGN_IN_UNAVAILABLE_MESSAGE)
                }
            };

            let page = LoginTemplate {
                email: input.email,
                error: Some(message.to_string()),
            };
            (status, page).into_response()
        }
    }
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (
        jar.add(clear_session_cookie(state.secure_cookies)),
        Redirect::to(&ROOT.url()),
    )
}

fn home_url() -> String {
    ROUTES
        .iter()
        .find(|route| route.page == Page::UserHome)
        .unwrap_or(&ROOT)
        .url()
}
