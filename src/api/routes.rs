//! API route configuration.

use crate::api::handlers::{health_handler, share_link_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public JSON routes.
///
/// # Endpoints
///
/// - `GET /health`     - Service health
/// - `GET /share-link` - Build a share link
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/share-link", get(share_link_handler))
}
