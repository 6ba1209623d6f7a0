//! Port for user-facing notifications.

/// Fire-and-forget notification surface (snackbar, flash message, console).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn show_error(&self, text: &str);

    fn show_info(&self, text: &str);
}
