//! Web front-end layer for browser-based UI.
//!
//! Serves the editor, the auth-gated pages, the registration and login
//! forms and the share dialog. Uses Askama templates for server-side
//! rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Auth gate for protected pages
//! - [`route_table`] - Static path to page table
//! - [`routes`] - Router configuration

pub mod handlers;
pub mod middleware;
pub mod route_table;
pub mod routes;
