//! Registration form validation rules.
//!
//! Rules that do not fit a `validator` derive attribute live here: the
//! paired password check and the username character set.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{ValidationError, ValidationErrors};

/// Error code flagged on the form when the two passwords differ.
pub const PASSWORD_MISMATCH: &str = "passwordMismatch";

/// Error code flagged on the `password` field itself for the same mismatch.
pub const NOT_MATCHED: &str = "notMatched";

/// Key `validator` uses for struct-level errors.
pub const FORM_LEVEL: &str = "__all__";

/// Letters, digits and underscore only.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]*$").unwrap());

/// Checks that the password and its confirmation agree.
///
/// Returns `Ok(())` when either field is empty (the required-field rules
/// report that case) or when both values are equal.
///
/// # Errors
///
/// When both are non-empty and differ, returns errors flagging
/// [`PASSWORD_MISMATCH`] on the form and [`NOT_MATCHED`] on `password`, so
/// both inputs render the mismatch.
pub fn validate_passwords_match(
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationErrors> {
    if password.is_empty() || confirm_password.is_empty() || password == confirm_password {
        return Ok(());
    }

    let mut errors = ValidationErrors::new();
    errors.add(
        FORM_LEVEL,
        ValidationError::new(PASSWORD_MISMATCH)
            .with_message(Cow::Borrowed("Passwords do not match")),
    );
    errors.add("password", ValidationError::new(NOT_MATCHED));
    Err(errors)
}

/// Whether a username, after lower-casing, uses only `[a-zA-Z0-9_]`.
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(&username.to_lowercase())
}

/// Flattens validation errors into display strings, sorted for stable output.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();

    messages.sort();
    messages.dedup();
    messages
}
