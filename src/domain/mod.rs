//! Domain layer containing entities, error taxonomy and collaborator ports.
//!
//! Nothing in here talks to the network or renders HTML. The application
//! layer drives these types; the infrastructure layer implements the ports.
//!
//! # Architecture
//!
//! - [`entities`] - Registration requests, share-link data, sessions, notifications
//! - [`errors`] - Registration and identity error taxonomy
//! - [`ports`] - Traits for the backend, identity provider, notifier and clipboard
//!
//! # Registration Flow
//!
//! 1. A [`entities::RegistrationRequest`] is built from submitted form values
//! 2. [`crate::application::forms::RegistrationForm`] validates the username
//! 3. [`ports::RegistrationBackend`] creates the account
//! 4. [`ports::IdentityProvider`] signs in and requests the verification email

pub mod entities;
pub mod errors;
pub mod ports;
