//! Notifier for the operator CLI.

use colored::Colorize;

use crate::domain::ports::Notifier;

/// Prints notifications to stderr, errors in red and info in cyan.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show_error(&self, text: &str) {
        eprintln!("{} {}", "✗".red().bold(), text.red());
    }

    fn show_info(&self, text: &str) {
        eprintln!("{} {}", "ℹ".cyan().bold(), text.cyan());
    }
}
