//! Registration form: validation, submission and the verification follow-up.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use validator::ValidationErrors;

use crate::domain::entities::{RegistrationRequest, RegistrationState};
use crate::domain::errors::{IdentityError, RegistrationError};
use crate::domain::ports::{IdentityProvider, Notifier, RegistrationBackend};
use crate::utils::validation::{is_valid_username, validate_passwords_match};

/// Shown when the username contains characters outside `[a-zA-Z0-9_]`.
pub const INVALID_USERNAME_MESSAGE: &str = "Invalid Username. No special characters";

/// Result of a single [`RegistrationForm::submit`] call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Account created; sign-in and the verification email run in `VerificationTask`.
    Registered(VerificationTask),
    /// Username failed the character check; the backend was not contacted.
    InvalidUsername,
    /// Backend rejected the account or could not be reached.
    Failed(RegistrationError),
    /// Another submission of this form is still pending.
    AlreadyInFlight,
}

impl SubmitOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }
}

/// Handle to the sign-in + verification email follow-up of a registration.
///
/// Dropping the handle detaches the task; it keeps running.
#[derive(Debug)]
pub struct VerificationTask(JoinHandle<Result<(), IdentityError>>);

impl VerificationTask {
    /// Waits for the follow-up to finish.
    ///
    /// # Errors
    ///
    /// Returns the identity provider error from sign-in or from the
    /// verification request, or [`IdentityError::Upstream`] if the task
    /// panicked.
    pub async fn wait(self) -> Result<(), IdentityError> {
        self.0.await.unwrap_or_else(|e| {
            Err(IdentityError::Upstream(format!(
                "verification task aborted: {e}"
            )))
        })
    }
}

/// One registration form instance.
///
/// Owns its lifecycle state ([`RegistrationState`]) and talks to the backend,
/// the identity provider and the notifier through their ports. The state is
/// published on a `watch` channel so views can follow the loading flag.
pub struct RegistrationForm<B, I, N>
where
    B: RegistrationBackend + ?Sized,
    I: IdentityProvider + ?Sized,
    N: Notifier + ?Sized,
{
    backend: Arc<B>,
    identity: Arc<I>,
    notifier: Arc<N>,
    state: watch::Sender<RegistrationState>,
}

impl<B, I, N> RegistrationForm<B, I, N>
where
    B: RegistrationBackend + ?Sized,
    I: IdentityProvider + ?Sized + 'static,
    N: Notifier + ?Sized,
{
    pub fn new(backend: Arc<B>, identity: Arc<I>, notifier: Arc<N>) -> Self {
        let (state, _) = watch::channel(RegistrationState::Idle);
        Self {
            backend,
            identity,
            notifier,
            state,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn state(&self) -> RegistrationState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<RegistrationState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state() == RegistrationState::Loading
    }

    pub fn is_registered(&self) -> bool {
        self.state() == RegistrationState::Registered
    }

    /// Cross-field password check, see [`validate_passwords_match`].
    ///
    /// # Errors
    ///
    /// Returns `passwordMismatch` on the form and `notMatched` on the
    /// password field when both values are non-empty and differ.
    pub fn validate_passwords_match(
        &self,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), ValidationErrors> {
        validate_passwords_match(password, confirm_password)
    }

    /// Submits the form.
    ///
    /// # Flow
    ///
    /// 1. Enter the loading state, or return [`SubmitOutcome::AlreadyInFlight`]
    /// 2. Reject usernames outside `[a-zA-Z0-9_]` without calling the backend
    /// 3. Register `(email, lower-cased username, password)`
    /// 4. On success, mark the form registered and spawn sign-in followed by
    ///    the verification email request
    /// 5. On failure, show the classified message; unclassified errors are
    ///    only logged
    ///
    /// The loading state is left on every path, including early returns.
    pub async fn submit(&self, request: &RegistrationRequest) -> SubmitOutcome {
        let Some(_loading) = LoadingGuard::enter(&self.state) else {
            debug!("Registration already in flight, ignoring submit");
            return SubmitOutcome::AlreadyInFlight;
        };

        let username = request.normalized_username();
        if !is_valid_username(&username) {
            self.notifier.show_error(INVALID_USERNAME_MESSAGE);
            return SubmitOutcome::InvalidUsername;
        }

        match self
            .backend
            .register(&request.email, &username, &request.password)
            .await
        {
            Ok(()) => {
                self.state.send_replace(RegistrationState::Registered);
                info!(username = %username, "Registration accepted");

                let task = self.spawn_verification(request.email.clone(), request.password.clone());
                SubmitOutcome::Registered(task)
            }
            Err(err) => {
                match err.user_message() {
                    Some(message) => self.notifier.show_error(message),
                    None => error!(error = %err, username = %username, "Registration failed"),
                }
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Signs in and, once the session exists, requests the verification email.
    fn spawn_verification(&self, email: String, password: String) -> VerificationTask {
        let identity = Arc::clone(&self.identity);

        VerificationTask(tokio::spawn(async move {
            let result = async {
                let session = identity.sign_in(&email, &password).await?;
                identity.send_verification_email(&session).await
            }
            .await;

            match &result {
                Ok(()) => info!(email = %email, "Verification email requested"),
                Err(e) => warn!(email = %email, error = %e, "Verification email not sent"),
            }

            result
        }))
    }
}

/// Holds a form in [`RegistrationState::Loading`] until dropped.
///
/// On drop the state returns to what it was before entering, unless the
/// submission moved it on (to `Registered`).
struct LoadingGuard<'a> {
    state: &'a watch::Sender<RegistrationState>,
    previous: RegistrationState,
}

impl<'a> LoadingGuard<'a> {
    fn enter(state: &'a watch::Sender<RegistrationState>) -> Option<Self> {
        let mut previous = RegistrationState::Idle;
        let entered = state.send_if_modified(|current| {
            if *current == RegistrationState::Loading {
                return false;
            }
            previous = *current;
            *current = RegistrationState::Loading;
            true
        });

        entered.then(|| Self { state, previous })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let previous = self.previous;
        self.state.send_if_modified(|current| {
            if *current != RegistrationState::Loading {
                return false;
            }
            *current = previous;
            true
        });
    }
}
