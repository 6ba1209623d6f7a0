//! # vastdime-web
//!
//! Server-rendered front-end of the vastdime code editor, built with Axum
//! and Askama.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, error taxonomy and ports to external services
//! - **Application Layer** ([`application`]) - Registration form, share-link dialog, form registry
//! - **Infrastructure Layer** ([`infrastructure`]) - Backend and identity clients, notifiers, clipboard
//! - **API Layer** ([`api`]) - JSON endpoints and shared middleware
//! - **Web Layer** ([`web`]) - Route table, auth gate and HTML pages
//!
//! ## Features
//!
//! - Editor, saved programs and user home pages; the latter two behind an auth gate
//! - Registration with local validation, typed backend errors and a verification email
//! - Share links for programs, in the browser, over JSON or from the CLI
//! - Rate limiting and structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! export API_URL="https://api.vastdime.com"
//! export IDENTITY_API_KEY="..."
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::forms::{RegistrationForm, ShareLinkDialog, SubmitOutcome};
    pub use crate::domain::entities::{RegistrationRequest, Session, ShareLinkData};
    pub use crate::domain::errors::{IdentityError, RegistrationError};
    pub use crate::domain::ports::{Clipboard, IdentityProvider, Notifier, RegistrationBackend};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
