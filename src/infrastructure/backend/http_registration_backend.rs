//! JSON-over-HTTP client for the backend registration endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::domain::errors::{BackendErrorCode, RegistrationError};
use crate::domain::ports::RegistrationBackend;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Registration backend reached over HTTP.
///
/// Sends `POST {base_url}/register` with `{email, username, password}`.
pub struct HttpRegistrationBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRegistrationBackend {
    /// Builds a client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    email: &'a str,
    username: &'a str,
    password: &'a str,
}

/// Failed response body; the fields sit at the top level or under `error`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Nested { error: ErrorFields },
    Flat(ErrorFields),
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ErrorFields {
    code: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

#[async_trait]
impl RegistrationBackend for HttpRegistrationBackend {
    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), RegistrationError> {
        let url = format!("{}/register", self.base_url);
        debug!(url = %url, username = %username, "Submitting registration");

        let response = self
            .http
            .post(&url)
            .json(&RegisterBody {
                email,
                username,
                password,
            })
            .send()
            .await
            .map_err(|e| RegistrationError::Unclassified(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_error(status.as_u16(), &body))
    }
}

/// Maps a failed registration response onto [`RegistrationError`].
///
/// Both `{"message": ...}` and `{"error": {"message": ...}}` bodies are read.
/// The code is taken from `code`, then `message`, then `error`; the first
/// value that names a known code wins.
pub fn classify_error(status: u16, body: &str) -> RegistrationError {
    let detail = format!("HTTP {status}: {body}");

    let fields = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Nested { error }) => error,
        Ok(ErrorBody::Flat(fields)) => fields,
        Err(_) => return RegistrationError::Unclassified(detail),
    };

    let ErrorFields {
        code,
        error,
        message,
    } = fields;

    let code = [code, message, error]
        .into_iter()
        .flatten()
        .map(|value| BackendErrorCode::from_wire(&value))
        .find(|code| *code != BackendErrorCode::Unknown)
        .unwrap_or(BackendErrorCode::Unknown);

    RegistrationError::from_code(code, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_structured_code() {
        assert_eq!(
            classify_error(409, r#"{"error":{"code":"username-taken"}}"#),
            RegistrationError::UsernameTaken
        );
    }

    #[test]
    fn test_classify_legacy_message() {
        assert_eq!(
            classify_error(400, r#"{"error":{"message":"Email is already in use"}}"#),
            RegistrationError::EmailInUse
        );
        assert_eq!(
            classify_error(
                400,
                r#"{"error":{"message":"This username is already taken"}}"#
            ),
            RegistrationError::UsernameTaken
        );
    }

    #[test]
    fn test_classify_provider_error_field() {
        assert_eq!(
            classify_error(
                400,
                r#"{"error":{"error":"auth/weak-password","message":"Password should be at least 6 characters"}}"#
            ),
            RegistrationError::WeakPassword
        );
    }

    #[test]
    fn test_code_takes_priority_over_message() {
        assert_eq!(
            classify_error(
                409,
                r#"{"error":{"code":"email-in-use","message":"This username is already taken"}}"#
            ),
            RegistrationError::EmailInUse
        );
    }

    #[test]
    fn test_unknown_code_is_unclassified() {
        let err = classify_error(500, r#"{"error":{"message":"Internal error"}}"#);
        assert!(matches!(err, RegistrationError::Unclassified(ref d) if d.contains("HTTP 500")));
    }

    #[test]
    fn test_non_json_body_is_unclassified() {
        let err = classify_error(502, "<html>Bad Gateway</html>");
        assert!(matches!(err, RegistrationError::Unclassified(ref d) if d.contains("Bad Gateway")));
    }

    #[test]
    fn test_classify_flat_body() {
        assert_eq!(
            classify_error(400, r#"{"message":"Email is already in use"}"#),
            RegistrationError::EmailInUse
        );
        assert_eq!(
            classify_error(400, r#"{"message":"This username is already taken"}"#),
            RegistrationError::UsernameTaken
        );
        assert_eq!(
            classify_error(400, r#"{"error":"auth/weak-password"}"#),
            RegistrationError::WeakPassword
        );
    }

    #[test]
    fn test_message_checked_before_error_field() {
        assert_eq!(
            classify_error(
                400,
                r#"{"error":{"error":"auth/weak-password","message":"Email is already in use"}}"#
            ),
            RegistrationError::EmailInUse
        );
        assert_eq!(
            classify_error(
                400,
                r#"{"error":"auth/weak-password","message":"This username is already taken"}"#
            ),
            RegistrationError::UsernameTaken
        );
    }

    #[test]
    fn test_empty_object_is_unclassified() {
        let err = classify_error(400, "{}");
        assert!(matches!(err, RegistrationError::Unclassified(ref d) if d.contains("HTTP 400")));
    }
}
