#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use vastdime_web::domain::entities::Session;
use vastdime_web::domain::errors::{IdentityError, RegistrationError};
use vastdime_web::domain::ports::{IdentityProvider, RegistrationBackend};
use vastdime_web::state::AppState;

pub const VALID_TOKEN: &str = "valid-token";
pub const VALID_PASSWORD: &str = "correct-password";
pub const SHARE_HOST: &str = "www.vastdime.com";

/// Backend that records accepted registrations and fails with a preset error.
#[derive(Default)]
pub struct FakeBackend {
    pub registered: Mutex<Vec<(String, String)>>,
    failure: Mutex<Option<RegistrationError>>,
}

impl FakeBackend {
    pub fn fail_with(&self, error: RegistrationError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn registered(&self) -> Vec<(String, String)> {
        self.registered.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationBackend for FakeBackend {
    async fn register(
        &self,
        email: &str,
        username: &str,
        _password: &str,
    ) -> Result<(), RegistrationError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.registered
            .lock()
            .unwrap()
            .push((email.to_string(), username.to_string()));
        Ok(())
    }
}

/// Identity provider accepting [`VALID_PASSWORD`] and [`VALID_TOKEN`] only.
#[derive(Default)]
pub struct FakeIdentity {
    pub verification_emails: Mutex<Vec<String>>,
    pub verification_sent: Notify,
    pub unavailable: Mutex<bool>,
}

impl FakeIdentity {
    pub fn go_down(&self) {
        *self.unavailable.lock().unwrap() = true;
    }

    fn check_up(&self) -> Result<(), IdentityError> {
        if *self.unavailable.lock().unwrap() {
            return Err(IdentityError::Upstream("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        self.check_up()?;
        if password != VALID_PASSWORD {
            return Err(IdentityError::InvalidCredentials);
        }
        Ok(Session {
            id_token: VALID_TOKEN.to_string(),
            local_id: "uid-1".to_string(),
            email: email.to_string(),
            expires_at: Utc::now() + Duration::seconds(3600),
        })
    }

    async fn send_verification_email(&self, session: &Session) -> Result<(), IdentityError> {
        self.check_up()?;
        self.verification_emails
            .lock()
            .unwrap()
            .push(session.email.clone());
        self.verification_sent.notify_one();
        Ok(())
    }

    async fn verify_session(&self, id_token: &str) -> Result<bool, IdentityError> {
        self.check_up()?;
        Ok(id_token == VALID_TOKEN)
    }
}

pub fn create_test_state() -> (AppState, Arc<FakeBackend>, Arc<FakeIdentity>) {
    let backend = Arc::new(FakeBackend::default());
    let identity = Arc::new(FakeIdentity::default());

    let state = AppState::new(backend.clone(), identity.clone(), 100, SHARE_HOST, false);

    (state, backend, identity)
}
