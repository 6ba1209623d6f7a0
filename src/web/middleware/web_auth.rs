//! Auth gate for the protected pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};
use tracing::{debug, warn};

use crate::state::AppState;
use crate::utils::cookies::{SESSION_COOKIE, read_cookie};
use crate::web::route_table::ROOT;

/// Lets a request through only when it carries a live session.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session_token=<id token>
/// ```
///
/// # Flow
///
/// 1. Extract `session_token` from the `Cookie` header
/// 2. Ask the identity provider whether the token is still live
/// 3. On success, continue to the page handler
/// 4. Otherwise redirect to the root page
///
/// A provider outage counts as unauthenticated.
///
/// # Example
///
/// ```rust,ignore
/// let gated = Router::new()
///     .route("/programs", get(programs_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let path = req.uri().path().to_string();
    let root = Redirect::to(&ROOT.url());

    let Some(token) = read_cookie(req.headers(), SESSION_COOKIE) else {
        debug!(path = %path, "No session cookie, redirecting to root");
        return Err(root);
    };

    match st.identity.verify_session(&token).await {
        Ok(true) => Ok(next.run(req).await),
        Ok(false) => {
            debug!(path = %path, "Session rejected, redirecting to root");
            Err(root)
        }
        Err(e) => {
            warn!(path = %path, error = %e, "Session check failed, redirecting to root");
            Err(root)
        }
    }
}
