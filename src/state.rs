//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::forms::{FormRegistry, RegistrationForm};
use crate::domain::ports::{IdentityProvider, RegistrationBackend};
use crate::infrastructure::notify::FlashNotifier;

/// Registration form as used by the web surface: dynamic adapters and a
/// per-form flash notifier.
pub type WebRegistrationForm =
    RegistrationForm<dyn RegistrationBackend, dyn IdentityProvider, FlashNotifier>;

pub type WebFormRegistry = FormRegistry<dyn RegistrationBackend, dyn IdentityProvider, FlashNotifier>;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn RegistrationBackend>,
    pub identity: Arc<dyn IdentityProvider>,
    pub forms: Arc<WebFormRegistry>,
    /// Host share links point at, without scheme.
    pub share_host: String,
    /// Adds `Secure` to the session cookie.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn RegistrationBackend>,
        identity: Arc<dyn IdentityProvider>,
        form_capacity: usize,
        share_host: impl Into<String>,
        secure_cookies: bool,
    ) -> Self {
        Self {
            backend,
            identity,
            forms: Arc::new(FormRegistry::new(form_capacity)),
            share_host: share_host.into(),
            secure_cookies,
        }
    }

    /// Builds a fresh registration form wired to this state's adapters.
    pub fn new_registration_form(&self) -> WebRegistrationForm {
        RegistrationForm::new(
            Arc::clone(&self.backend),
            Arc::clone(&self.identity),
            Arc::new(FlashNotifier::new()),
        )
    }
}
