//! Backend API adapters.

mod http_registration_backend;

pub use http_registration_backend::{HttpRegistrationBackend, classify_error};
