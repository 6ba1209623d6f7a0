//! Ports to the external collaborators of the front-end.
//!
//! These traits abstract the services the forms and dialogs depend on.
//! Concrete adapters live in `crate::infrastructure`; mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Ports
//!
//! - [`RegistrationBackend`] - Account creation on the backend API
//! - [`IdentityProvider`] - Sign-in, verification email, session checks
//! - [`Notifier`] - Fire-and-forget user notifications
//! - [`Clipboard`] - Host clipboard access

pub mod clipboard;
pub mod identity_provider;
pub mod notifier;
pub mod registration_backend;

pub use clipboard::Clipboard;
pub use identity_provider::IdentityProvider;
pub use notifier::Notifier;
pub use registration_backend::RegistrationBackend;

#[cfg(test)]
pub use clipboard::MockClipboard;
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
#[cfg(test)]
pub use notifier::MockNotifier;
#[cfg(test)]
pub use registration_backend::MockRegistrationBackend;
