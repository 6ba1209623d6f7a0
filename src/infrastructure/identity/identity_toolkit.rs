//! Identity Toolkit REST API client.
//!
//! Covers the three calls the front-end needs: password sign-in, the
//! verification email, and id token lookup for the auth gate. Response
//! parsing is kept in free functions so it can be tested without a server.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration as StdDuration;
use tracing::debug;

use crate::domain::entities::Session;
use crate::domain::errors::IdentityError;
use crate::domain::ports::IdentityProvider;

/// Production endpoint prefix.
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Provider error messages that mean "wrong email or password".
const CREDENTIAL_ERRORS: &[&str] = &[
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
    "INVALID_EMAIL",
    "USER_DISABLED",
    "MISSING_PASSWORD",
];

/// Provider error messages that mean the id token is no longer usable.
const SESSION_ERRORS: &[&str] = &[
    "INVALID_ID_TOKEN",
    "TOKEN_EXPIRED",
    "USER_NOT_FOUND",
    "CREDENTIAL_TOO_OLD_LOGIN_AGAIN",
];

// =============================================================================
// CLIENT
// =============================================================================

pub struct IdentityToolkitClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl IdentityToolkitClient {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: StdDuration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(StdDuration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// POSTs `body` to `accounts:{method}` and returns `(status, text)`.
    async fn call<T: Serialize + ?Sized>(
        &self,
        method: &str,
        body: &T,
    ) -> Result<(u16, String), IdentityError> {
        let url = format!("{}/accounts:{method}", self.base_url);
        debug!(method = %method, "Calling identity provider");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityError::Upstream(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| IdentityError::Upstream(e.to_string()))?;

        Ok((status, text))
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let body = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };

        let (status, text) = self.call("signInWithPassword", &body).await?;
        if status != 200 {
            return Err(classify_error(status, &text, CREDENTIAL_ERRORS, IdentityError::InvalidCredentials));
        }

        parse_sign_in(&text, Utc::now())
    }

    async fn send_verification_email(&self, session: &Session) -> Result<(), IdentityError> {
        let body = OobCodeRequest {
            request_type: "VERIFY_EMAIL",
            id_token: &session.id_token,
        };

        let (status, text) = self.call("sendOobCode", &body).await?;
        if status != 200 {
            return Err(classify_error(status, &text, SESSION_ERRORS, IdentityError::InvalidSession));
        }

        Ok(())
    }

    async fn verify_session(&self, id_token: &str) -> Result<bool, IdentityError> {
        let body = LookupRequest { id_token };

        let (status, text) = self.call("lookup", &body).await?;
        if status == 200 {
            return parse_lookup(&text);
        }

        match classify_error(status, &text, SESSION_ERRORS, IdentityError::InvalidSession) {
            IdentityError::InvalidSession => Ok(false),
            other => Err(other),
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    id_token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    local_id: String,
    email: String,
    expires_in: String,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Parses a `signInWithPassword` success body into a [`Session`].
///
/// # Errors
///
/// Returns [`IdentityError::Upstream`] if the body is malformed.
pub fn parse_sign_in(json: &str, now: DateTime<Utc>) -> Result<Session, IdentityError> {
    let response: SignInResponse =
        serde_json::from_str(json).map_err(|e| IdentityError::Upstream(e.to_string()))?;

    let expires_in: i64 = response.expires_in.parse().map_err(|_| {
        IdentityError::Upstream(format!("invalid expiresIn: {}", response.expires_in))
    })?;

    Ok(Session {
        id_token: response.id_token,
        local_id: response.local_id,
        email: response.email,
        expires_at: now + Duration::seconds(expires_in),
    })
}

/// Parses an `accounts:lookup` success body; a token is live if it maps to a user.
///
/// # Errors
///
/// Returns [`IdentityError::Upstream`] if the body is malformed.
pub fn parse_lookup(json: &str) -> Result<bool, IdentityError> {
    let response: LookupResponse =
        serde_json::from_str(json).map_err(|e| IdentityError::Upstream(e.to_string()))?;
    Ok(!response.users.is_empty())
}

/// Classifies an error response.
///
/// The provider reports errors as `{"error": {"message": "CODE : detail"}}`.
/// When `CODE` is one of `known`, `mapped` is returned; anything else is
/// [`IdentityError::Upstream`].
pub fn classify_error(
    status: u16,
    body: &str,
    known: &[&str],
    mapped: IdentityError,
) -> IdentityError {
    let code = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| {
            envelope
                .error
                .message
                .split(':')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        });

    match code {
        Some(code) if known.contains(&code.as_str()) => mapped,
        Some(code) => IdentityError::Upstream(format!("HTTP {status}: {code}")),
        None => IdentityError::Upstream(format!("HTTP {status}: {body}")),
    }
}
