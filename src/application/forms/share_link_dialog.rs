//! Share-link dialog.

use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::warn;

use crate::domain::entities::ShareLinkData;
use crate::domain::ports::{Clipboard, Notifier};

/// Shown after the link has been handed to the clipboard.
pub const LINK_COPIED_MESSAGE: &str = "Link added to clipboard";

/// Opener's side of a dialog: resolves once the dialog is dismissed.
#[derive(Debug)]
pub struct DialogHandle(oneshot::Receiver<()>);

impl DialogHandle {
    /// Waits until the dialog is closed or dropped.
    pub async fn closed(self) {
        let _ = self.0.await;
    }
}

/// Dialog presenting a shareable link for a username/title pair.
///
/// The link is computed once when the dialog is initialized and never
/// changes afterwards.
pub struct ShareLinkDialog<N: Notifier + ?Sized> {
    data: ShareLinkData,
    link: String,
    notifier: Arc<N>,
    dismiss: Option<oneshot::Sender<()>>,
}

impl<N: Notifier + ?Sized> ShareLinkDialog<N> {
    /// Opens the dialog for `data`, building its link against `host`.
    pub fn initialize(host: &str, data: ShareLinkData, notifier: Arc<N>) -> (Self, DialogHandle) {
        let (tx, rx) = oneshot::channel();
        let link = data.link(host);

        let dialog = Self {
            data,
            link,
            notifier,
            dismiss: Some(tx),
        };

        (dialog, DialogHandle(rx))
    }

    pub fn data(&self) -> &ShareLinkData {
        &self.data
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Copies the link to `clipboard` and confirms with an info notification.
    ///
    /// A refused copy is logged; the confirmation is shown regardless.
    pub fn copy_link<C: Clipboard + ?Sized>(&self, clipboard: &C) {
        if let Err(e) = clipboard.copy(&self.link) {
            warn!(error = %e, "Clipboard refused share link");
        }
        self.notifier.show_info(LINK_COPIED_MESSAGE);
    }

    /// Dismisses the dialog.
    pub fn close(mut self) {
        if let Some(tx) = self.dismiss.take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DEFAULT_SHARE_HOST;
    use crate::domain::errors::ClipboardError;
    use crate::domain::ports::{MockClipboard, MockNotifier};

    fn notifier_expecting_copy_message() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_show_info()
            .withf(|text| text == LINK_COPIED_MESSAGE)
            .times(1)
            .return_const(());
        notifier.expect_show_error().never();
        notifier
    }

    #[test]
    fn test_initialize_builds_link_once() {
        let (dialog, _handle) = ShareLinkDialog::initialize(
            DEFAULT_SHARE_HOST,
            ShareLinkData::new("alice", "My Prog"),
            Arc::new(MockNotifier::new()),
        );

        assert_eq!(
            dialog.link(),
            "www.vastdime.com/editor?username=alice&title=My Prog"
        );
        assert_eq!(dialog.data().username, "alice");
    }

    #[test]
    fn test_copy_link_copies_and_notifies() {
        let (dialog, _handle) = ShareLinkDialog::initialize(
            DEFAULT_SHARE_HOST,
            ShareLinkData::new("alice", "demo"),
            Arc::new(notifier_expecting_copy_message()),
        );

        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_copy()
            .withf(|text| text == "www.vastdime.com/editor?username=alice&title=demo")
            .times(1)
            .returning(|_| Ok(()));

        dialog.copy_link(&clipboard);
    }

    #[test]
    fn test_copy_link_refused_still_notifies() {
        let (dialog, _handle) = ShareLinkDialog::initialize(
            DEFAULT_SHARE_HOST,
            ShareLinkData::new("alice", "demo"),
            Arc::new(notifier_expecting_copy_message()),
        );

        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_copy()
            .times(1)
            .returning(|_| Err(ClipboardError::Unavailable("no terminal".into())));

        dialog.copy_link(&clipboard);
    }

    #[tokio::test]
    async fn test_close_signals_opener() {
        let (dialog, handle) = ShareLinkDialog::initialize(
            DEFAULT_SHARE_HOST,
            ShareLinkData::new("alice", "demo"),
            Arc::new(MockNotifier::new()),
        );

        dialog.close();
        handle.closed().await;
    }

    #[tokio::test]
    async fn test_drop_also_resolves_handle() {
        let (dialog, handle) = ShareLinkDialog::initialize(
            DEFAULT_SHARE_HOST,
            ShareLinkData::new("alice", "demo"),
            Arc::new(MockNotifier::new()),
        );

        drop(dialog);
        handle.closed().await;
    }
}
