//! Handler for share-link synthesis.

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::share_link::ShareLinkResponse;
use crate::domain::entities::ShareLinkData;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the share link for a username/title pair.
///
/// # Endpoint
///
/// `GET /api/share-link?username={username}&title={title}`
///
/// # Response
///
/// ```json
/// { "link": "www.vastdime.com/editor?username=alice&title=My Prog" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if either parameter is missing or empty.
pub async fn share_link_handler(
    State(state): State<AppState>,
    Query(data): Query<ShareLinkData>,
) -> Result<Json<ShareLinkResponse>, AppError> {
    data.validate()?;

    let link = data.link(&state.share_host);
    debug!(username = %data.username, "Share link built");

    Ok(Json(ShareLinkResponse { link }))
}
