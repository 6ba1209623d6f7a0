//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer, talking to
//! the backend API, the identity provider and the host environment.
//!
//! # Modules
//!
//! - [`backend`] - Backend registration endpoint over HTTP
//! - [`identity`] - Identity Toolkit REST client
//! - [`notify`] - Flash (web) and console (CLI) notifiers
//! - [`clipboard`] - Terminal clipboard via OSC 52

pub mod backend;
pub mod clipboard;
pub mod identity;
pub mod notify;
