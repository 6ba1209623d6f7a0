//! Application layer: the components the web and CLI surfaces drive.
//!
//! Components hold their own state and reach collaborators only through the
//! ports in [`crate::domain::ports`].
//!
//! # Available Components
//!
//! - [`forms::RegistrationForm`] - Registration validation and submission
//! - [`forms::ShareLinkDialog`] - Share link synthesis and clipboard copy
//! - [`forms::FormRegistry`] - Open registration forms of the web surface

pub mod forms;
