//! HTML template rendering handlers for the web front-end.

mod login;
mod pages;
mod register;
mod share;

pub use login::{login_page_handler, login_submit_handler, logout_handler};
pub use pages::{editor_handler, programs_handler, user_home_handler};
pub use register::{register_page_handler, register_submit_handler};
pub use share::share_link_page_handler;
