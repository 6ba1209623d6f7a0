//! Notifier adapters.
//!
//! - [`FlashNotifier`] - buffers messages for the web surface
//! - [`ConsoleNotifier`] - coloured stderr output for the CLI

mod console;
mod flash;

pub use console::ConsoleNotifier;
pub use flash::FlashNotifier;
