//! Domain entities.
//!
//! - [`RegistrationRequest`] - Values submitted by the registration form
//! - [`RegistrationState`] - Lifecycle of a single registration form
//! - [`ShareLinkData`] - Username/title pair a share link is built from
//! - [`Session`] - Identity provider session returned by sign-in
//! - [`Notification`] - User-facing message raised by a form or dialog

pub mod notification;
pub mod registration;
pub mod session;
pub mod share_link;

pub use notification::{Notification, NotificationLevel};
pub use registration::{RegistrationRequest, RegistrationState};
pub use session::Session;
pub use share_link::{DEFAULT_SHARE_HOST, ShareLinkData};
