//! HTTP-facing error type shared by the web and API layers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use validator::ValidationErrors;

/// Error payload returned in JSON error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Application error mapped onto HTTP status codes.
///
/// Carries a human-readable message and free-form JSON details that are
/// echoed back to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and stable machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            Self::Validation { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::ValidationError;

    #[test]
    fn test_bad_request_response() {
        let err = AppError::bad_request("Missing title", json!({ "title": [] }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_info_carries_message_and_details() {
        let err = AppError::bad_request("Missing title", json!({ "username": "alice" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "Missing title");
        assert_eq!(info.details["username"], "alice");
    }

    #[test]
    fn test_from_validation_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("length"));

        let err = AppError::from(errors);

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_error_info().details.get("title").is_some());
    }
}
