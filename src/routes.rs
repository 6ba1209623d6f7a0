//! Top-level router configuration combining web and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Editor (public)
//! - `GET  /programs`    - Saved programs (session cookie required)
//! - `GET  /user-home`   - User home (session cookie required)
//! - `/register`, `/login`, `/logout`, `/share` - Forms and dialogs
//! - `/api/*`            - JSON endpoints (health, share link)
//! - anything else       - Redirect to `/`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, tighter on form routes
//! - **Auth gate** - Session cookie check on protected pages
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let pages = web::routes::page_routes(state.clone()).layer(rate_limit::layer());
    let forms = web::routes::form_routes().layer(rate_limit::secure_layer());
    let api_router = api::routes::public_routes().layer(rate_limit::layer());

    let router = Router::new()
        .nest("/api", api_router)
        .merge(forms)
        .merge(pages)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
