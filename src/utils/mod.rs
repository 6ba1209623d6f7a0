//! Helper functions shared across layers.
//!
//! - [`validation`] - Password pairing, username character set, message flattening
//! - [`form_id`] - Random form instance identifiers
//! - [`cookies`] - `Cookie` header parsing and session cookie builders

pub mod cookies;
pub mod form_id;
pub mod validation;
