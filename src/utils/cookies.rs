//! Session cookie helpers.

use axum::http::{HeaderMap, header::COOKIE};
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration as TimeDuration;

/// Name of the cookie carrying the identity provider id token.
pub const SESSION_COOKIE: &str = "session_token";

/// Extracts a cookie value from the `Cookie` header.
///
/// Handles multiple cookies in one header by splitting on semicolons and
/// ignoring unrelated pairs.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name && !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

/// Session cookie carrying `token` for `max_age_seconds`.
pub fn session_cookie(
    token: impl Into<String>,
    max_age_seconds: i64,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.into()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::seconds(max_age_seconds))
        .build()
}

/// Expired session cookie; adding it to a jar removes the session token.
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    session_cookie("", 0, secure)
}
