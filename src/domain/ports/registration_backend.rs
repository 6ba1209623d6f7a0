//! Port for the backend registration endpoint.

use crate::domain::errors::RegistrationError;
use async_trait::async_trait;

/// Creates user accounts on the backend API.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpRegistrationBackend`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    /// Registers a new account.
    ///
    /// `username` is expected to be lower-cased already.
    ///
    /// # Errors
    ///
    /// Returns a classified [`RegistrationError`] when the backend rejects the
    /// account, or [`RegistrationError::Unclassified`] on transport failures
    /// and unknown error codes.
    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), RegistrationError>;
}
