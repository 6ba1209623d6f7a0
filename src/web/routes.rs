//! Web front-end route configuration.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{MethodRouter, get, post},
};

use crate::state::AppState;
use crate::web::handlers::{
    editor_handler, login_page_handler, login_submit_handler, logout_handler, programs_handler,
    register_page_handler, register_submit_handler, share_link_page_handler, user_home_handler,
};
use crate::web::middleware::web_auth;
use crate::web::route_table::{Page, ROOT, ROUTES, Route};

fn page_handler(page: Page) -> MethodRouter<AppState> {
    match page {
        Page::Editor => get(editor_handler),
        Page::Programs => get(programs_handler),
        Page::UserHome => get(user_home_handler),
    }
}

/// Pages from [`ROUTES`].
///
/// Public entries are served as is; entries with `requires_auth` sit behind
/// [`web_auth::layer`]. Paths matching no route redirect to the root page.
pub fn page_routes(state: AppState) -> Router<AppState> {
    let (gated, public): (Vec<&Route>, Vec<&Route>) =
        ROUTES.iter().partition(|route| route.requires_auth);

    let public = public.into_iter().fold(Router::new(), |router, route| {
        router.route(&route.url(), page_handler(route.page))
    });

    let gated = gated
        .into_iter()
        .fold(Router::new(), |router, route| {
            router.route(&route.url(), page_handler(route.page))
        })
        .route_layer(middleware::from_fn_with_state(state, web_auth::layer));

    Router::new()
        .merge(public)
        .merge(gated)
        .fallback(|| async { Redirect::to(&ROOT.url()) })
}

/// Public forms and dialogs.
///
/// # Endpoints
///
/// - `GET  /register` - Registration page
/// - `POST /register` - Submit registration
/// - `GET  /login`    - Login page
/// - `POST /login`    - Sign in, set the session cookie
/// - `POST /logout`   - Clear the session cookie
/// - `GET  /share`    - Share-link dialog
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/register",
            get(register_page_handler).post(register_submit_handler),
        )
        .route("/login", get(login_page_handler).post(login_submit_handler))
        .route("/logout", post(logout_handler))
        .route("/share", get(share_link_page_handler))
}

/// All web routes, without rate limiting.
pub fn router(state: AppState) -> Router {
    page_routes(state.clone())
        .merge(form_routes())
        .with_state(state)
}
