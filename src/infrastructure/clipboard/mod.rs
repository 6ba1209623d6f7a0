//! Clipboard adapters.

mod terminal;

pub use terminal::{TerminalClipboard, osc52_sequence};
