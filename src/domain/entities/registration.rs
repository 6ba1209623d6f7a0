use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError};

use crate::utils::validation::{PASSWORD_MISMATCH, validate_passwords_match};

/// Values submitted by the registration form.
///
/// Built from form state at submit time and dropped once the submission
/// resolves. The username is stored as typed; it is lower-cased only when the
/// request is handed to the backend.
#[derive(Clone, Deserialize, Validate)]
#[validate(schema(function = "passwords_match"))]
pub struct RegistrationRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "Please confirm your password"))]
    pub confirm_password: String,
}

impl RegistrationRequest {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Username as sent to the backend.
    pub fn normalized_username(&self) -> String {
        self.username.to_lowercase()
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}

fn passwords_match(request: &RegistrationRequest) -> Result<(), ValidationError> {
    validate_passwords_match(&request.password, &request.confirm_password).map_err(|_| {
        ValidationError::new(PASSWORD_MISMATCH)
            .with_message(Cow::Borrowed("Passwords do not match"))
    })
}

/// Lifecycle of one registration form.
///
/// ```text
/// Idle --submit--> Loading --ok--> Registered
///                     |
///                     +--error--> Idle (or Registered, if it was before)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationState {
    #[default]
    Idle,
    Loading,
    Registered,
}
