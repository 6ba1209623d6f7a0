//! Share-link dialog page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use validator::Validate;

use crate::application::forms::LINK_COPIED_MESSAGE;
use crate::domain::entities::ShareLinkData;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the share dialog.
///
/// The copy button and the dismiss button are wired up in the browser; the
/// server only fixes the link and the confirmation text.
#[derive(Template, WebTemplate)]
#[template(path = "share_link.html")]
pub struct ShareLinkTemplate {
    pub username: String,
    pub title: String,
    pub link: String,
    pub copied_message: &'static str,
}

/// Renders the share dialog for a program.
///
/// # Endpoint
///
/// `GET /share?username={username}&title={title}`
///
/// # Errors
///
/// Returns `400 Bad Request` if either parameter is missing or empty.
pub async fn share_link_page_handler(
    State(state): State<AppState>,
    Query(data): Query<ShareLinkData>,
) -> Result<ShareLinkTemplate, AppError> {
    data.validate()?;

    Ok(ShareLinkTemplate {
        link: data.link(&state.share_host),
        username: data.username,
        title: data.title,
        copied_message: LINK_COPIED_MESSAGE,
    })
}
