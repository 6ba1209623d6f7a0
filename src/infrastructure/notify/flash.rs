//! Notifier that buffers messages for the next rendered page.

use std::sync::{Mutex, PoisonError};

use crate::domain::entities::Notification;
use crate::domain::ports::Notifier;

/// Collects notifications until a handler drains them into a template.
#[derive(Debug, Default)]
pub struct FlashNotifier {
    pending: Mutex<Vec<Notification>>,
}

impl FlashNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn push(&self, notification: Notification) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

impl Notifier for FlashNotifier {
    fn show_error(&self, text: &str) {
        self.push(Notification::error(text));
    }

    fn show_info(&self, text: &str) {
        self.push(Notification::info(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_in_order_and_empties() {
        let notifier = FlashNotifier::new();
        notifier.show_error("first");
        notifier.show_info("second");

        let drained = notifier.drain();
        assert_eq!(
            drained,
            vec![Notification::error("first"), Notification::info("second")]
        );
        assert!(notifier.drain().is_empty());
    }
}
