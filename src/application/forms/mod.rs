//! Stateful front-end components.

pub mod form_registry;
pub mod registration_form;
pub mod share_link_dialog;

pub use form_registry::FormRegistry;
pub use registration_form::{
    INVALID_USERNAME_MESSAGE, RegistrationForm, SubmitOutcome, VerificationTask,
};
pub use share_link_dialog::{DialogHandle, LINK_COPIED_MESSAGE, ShareLinkDialog};
