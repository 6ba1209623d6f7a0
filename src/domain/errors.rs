//! Error taxonomy for the registration flow and its collaborators.

use serde::Deserialize;
use serde::de::IntoDeserializer;
use serde::de::value::{Error as ValueError, StrDeserializer};

/// Message shown when the backend reports the email is registered already.
pub const EMAIL_IN_USE_MESSAGE: &str = "Email is already in use. Please login";
/// Message shown when the backend reports the username is taken.
pub const USERNAME_TAKEN_MESSAGE: &str = "This username is already taken";
/// Message shown when the password is rejected as too weak.
pub const WEAK_PASSWORD_MESSAGE: &str = "Password is too weak. Please try again";

/// Structured error code of the registration backend contract.
///
/// Older backend deployments only send the human-readable message or a
/// provider error string, so those values are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BackendErrorCode {
    #[serde(rename = "email-in-use", alias = "Email is already in use")]
    EmailInUse,
    #[serde(rename = "username-taken", alias = "This username is already taken")]
    UsernameTaken,
    #[serde(rename = "auth/weak-password", alias = "weak-password")]
    WeakPassword,
    #[serde(other)]
    Unknown,
}

impl BackendErrorCode {
    /// Parses a wire value, falling back to [`BackendErrorCode::Unknown`].
    pub fn from_wire(value: &str) -> Self {
        let deserializer: StrDeserializer<'_, ValueError> = value.into_deserializer();
        Self::deserialize(deserializer).unwrap_or(Self::Unknown)
    }
}

/// Failure of a registration attempt, one case per user-facing category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("email is already in use")]
    EmailInUse,
    #[error("username is already taken")]
    UsernameTaken,
    #[error("password is too weak")]
    WeakPassword,
    #[error("registration failed: {0}")]
    Unclassified(String),
}

impl RegistrationError {
    /// Maps a backend code onto the taxonomy; `detail` is kept for unknown codes.
    pub fn from_code(code: BackendErrorCode, detail: impl Into<String>) -> Self {
        match code {
            BackendErrorCode::EmailInUse => Self::EmailInUse,
            BackendErrorCode::UsernameTaken => Self::UsernameTaken,
            BackendErrorCode::WeakPassword => Self::WeakPassword,
            BackendErrorCode::Unknown => Self::Unclassified(detail.into()),
        }
    }

    /// Text to surface to the user. Unclassified failures are only logged.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::EmailInUse => Some(EMAIL_IN_USE_MESSAGE),
            Self::UsernameTaken => Some(USERNAME_TAKEN_MESSAGE),
            Self::WeakPassword => Some(WEAK_PASSWORD_MESSAGE),
            Self::Unclassified(_) => None,
        }
    }
}

/// Failure reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("session is invalid or expired")]
    InvalidSession,
    #[error("identity provider error: {0}")]
    Upstream(String),
}

/// Failure to hand text to the host clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_structured_codes() {
        assert_eq!(
            BackendErrorCode::from_wire("email-in-use"),
            BackendErrorCode::EmailInUse
        );
        assert_eq!(
            BackendErrorCode::from_wire("username-taken"),
            BackendErrorCode::UsernameTaken
        );
        assert_eq!(
            BackendErrorCode::from_wire("auth/weak-password"),
            BackendErrorCode::WeakPassword
        );
    }

    #[test]
    fn test_from_wire_legacy_messages() {
        assert_eq!(
            BackendErrorCode::from_wire("Email is already in use"),
            BackendErrorCode::EmailInUse
        );
        assert_eq!(
            BackendErrorCode::from_wire("This username is already taken"),
            BackendErrorCode::UsernameTaken
        );
    }

    #[test]
    fn test_from_wire_unknown() {
        assert_eq!(
            BackendErrorCode::from_wire("database exploded"),
            BackendErrorCode::Unknown
        );
        assert_eq!(BackendErrorCode::from_wire(""), BackendErrorCode::Unknown);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            RegistrationError::EmailInUse.user_message(),
            Some("Email is already in use. Please login")
        );
        assert_eq!(
            RegistrationError::UsernameTaken.user_message(),
            Some("This username is already taken")
        );
        assert_eq!(
            RegistrationError::WeakPassword.user_message(),
            Some("Password is too weak. Please try again")
        );
        assert_eq!(
            RegistrationError::Unclassified("boom".into()).user_message(),
            None
        );
    }

    #[test]
    fn test_from_code_keeps_detail_for_unknown() {
        let err = RegistrationError::from_code(BackendErrorCode::Unknown, "HTTP 500");
        assert_eq!(err, RegistrationError::Unclassified("HTTP 500".to_string()));
    }
}
