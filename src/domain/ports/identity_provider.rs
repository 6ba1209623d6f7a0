//! Port for the third-party identity provider.

use crate::domain::entities::Session;
use crate::domain::errors::IdentityError;
use async_trait::async_trait;

/// Email/password identity provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::identity::IdentityToolkitClient`] - Identity Toolkit REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidCredentials`] when the provider rejects
    /// the credentials, [`IdentityError::Upstream`] otherwise.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    /// Asks the provider to email a verification link for the session's user.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidSession`] if the session token is no
    /// longer accepted.
    async fn send_verification_email(&self, session: &Session) -> Result<(), IdentityError>;

    /// Checks whether an id token still belongs to a live session.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the token is accepted
    /// - `Ok(false)` if the token is invalid, expired or its user is gone
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Upstream`] when the provider cannot be reached.
    async fn verify_session(&self, id_token: &str) -> Result<bool, IdentityError>;
}
