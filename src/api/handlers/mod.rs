//! HTTP request handlers for API endpoints.

pub mod health;
pub mod share_link;

pub use health::health_handler;
pub use share_link::share_link_handler;
