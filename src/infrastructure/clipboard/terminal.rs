//! Clipboard access through the terminal emulator.
//!
//! Writes an OSC 52 escape sequence carrying the base64-encoded text. Most
//! terminal emulators (and tmux with `set-clipboard on`) place the payload
//! on the system clipboard, which also works over SSH.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Stderr, Write};
use std::sync::{Mutex, PoisonError};

use crate::domain::errors::ClipboardError;
use crate::domain::ports::Clipboard;

/// Builds the OSC 52 sequence that sets the clipboard selection to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

pub struct TerminalClipboard<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalClipboard<Stderr> {
    /// Writes to stderr, leaving stdout free for piping.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Clipboard for TerminalClipboard<W> {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Unavailable("nothing to copy".to_string()));
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_copy_writes_sequence() {
        let clipboard = TerminalClipboard::new(Vec::new());
        clipboard
            .copy("www.vastdime.com/editor?username=alice&title=My Prog")
            .unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
    }

    #[test]
    fn test_copy_empty_is_refused() {
        let clipboard = TerminalClipboard::new(Vec::new());
        assert!(matches!(
            clipboard.copy(""),
            Err(ClipboardError::Unavailable(_))
        ));
        assert!(clipboard.into_inner().is_empty());
    }
}
