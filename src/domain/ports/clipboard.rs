//! Port for the host environment's clipboard.

use crate::domain::errors::ClipboardError;

/// Copies text to the clipboard of the host environment.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::TerminalClipboard`] - OSC 52 escape sequence
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the host refuses the write.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}
