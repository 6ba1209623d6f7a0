//! Registration page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use crate::application::forms::SubmitOutcome;
use crate::domain::entities::{Notification, RegistrationRequest};
use crate::domain::errors::RegistrationError;
use crate::state::AppState;
use crate::utils::form_id::is_well_formed;
use crate::utils::validation::validation_messages;

/// Template for the registration page.
///
/// Renders `templates/register.html` with:
/// - The form, keyed by `form_id`
/// - Flash notifications raised by the last submission
/// - Field validation messages
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub form_id: String,
    pub email: String,
    pub username: String,
    pub notifications: Vec<Notification>,
    pub errors: Vec<String>,
    pub loading: bool,
    pub registered: bool,
}

impl RegisterTemplate {
    fn blank(form_id: String) -> Self {
        Self {
            form_id,
            email: String::new(),
            username: String::new(),
            notifications: Vec::new(),
            errors: Vec::new(),
            loading: false,
            registered: false,
        }
    }
}

/// Submitted registration form.
#[derive(Deserialize)]
pub struct RegisterInput {
    #[serde(default)]
    pub form_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Renders an empty registration form backed by a new form instance.
///
/// # Endpoint
///
/// `GET /register`
pub async fn register_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (form_id, _) = state.forms.open(state.new_registration_form());
    RegisterTemplate::blank(form_id)
}

/// Submits the registration form.
///
/// # Endpoint
///
/// `POST /register` (form-encoded)
///
/// # Response Codes
///
/// - **201 Created**: Account created, verification email on its way
/// - **202 Accepted**: An earlier submission of the same form is still pending
/// - **409 Conflict**: Email or username already taken
/// - **422 Unprocessable Entity**: Validation failed, invalid username or weak password
/// - **502 Bad Gateway**: Backend failure without a user-facing message
///
/// Every response re-renders the page with the form's notifications.
pub async fn register_submit_handler(
    State(state): State<AppState>,
    Form(input): Form<RegisterInput>,
) -> impl IntoResponse {
    let request = RegistrationRequest::new(
        input.email,
        input.username,
        input.password,
        input.confirm_password,
    );

    let claimed_id = if is_well_formed(&input.form_id) {
        input.form_id.as_str()
    } else {
        ""
    };
    let (form_id, form) = state
        .forms
        .get_or_open(claimed_id, || state.new_registration_form());

    let mut page = RegisterTemplate {
        email: request.email.clone(),
        username: request.username.clone(),
        ..RegisterTemplate::blank(form_id.clone())
    };

    if let Err(errors) = request.validate() {
        page.errors = validation_messages(&errors);
        return (StatusCode::UNPROCESSABLE_ENTITY, page);
    }

    let outcome = form.submit(&request).await;
    page.notifications = form.notifier().drain();
    page.loading = form.is_loading();
    page.registered = form.is_registered();

    let status = match outcome {
        SubmitOutcome::Registered(_) => {
            state.forms.remove(&form_id);
            StatusCode::CREATED
        }
        SubmitOutcome::AlreadyInFlight => StatusCode::ACCEPTED,
        SubmitOutcome::InvalidUsername => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed(err) => {
            debug!(form_id = %form_id, error = %err, "Registration rejected");
            failure_status(&err)
        }
    };

    (status, page)
}

fn failure_status(err: &RegistrationError) -> StatusCode {
    match err {
        RegistrationError::EmailInUse | RegistrationError::UsernameTaken => StatusCode::CONFLICT,
        RegistrationError::WeakPassword => StatusCode::UNPROCESSABLE_ENTITY,
        RegistrationError::Unclassified(_) => StatusCode::BAD_GATEWAY,
    }
}
