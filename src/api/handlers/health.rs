//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// Upstream services are not probed; the front-end stays up while they are
/// down and reports their failures per request.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registration_forms": { "status": "ok", "message": "Open forms: 3" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registration_forms: check_forms(&state),
        },
    };

    Json(response)
}

fn check_forms(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Open forms: {}", state.forms.len())),
    }
}
