//! Copying entry keys to the clipboard.
//!
//! Two transports are tried in order:
//! 1. OSC 52 escape sequence, only when stdout is a terminal (works over SSH)
//! 2. System clipboard via `arboard`

use std::io::{IsTerminal, Write};

pub struct Clipboard;

impl Clipboard {
    /// Copies text, returning `Ok(())` if any transport succeeded.
    pub fn copy(text: &str) -> Result<(), ClipboardError> {
        if std::io::stdout().is_terminal() && Self::copy_osc52(text).is_ok() {
            return Ok(());
        }

        Self::copy_system(text)
    }

    fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(osc52_sequence(text).as_bytes())
            .map_err(|e| ClipboardError::Osc52(e.to_string()))?;
        stdout
            .flush()
            .map_err(|e| ClipboardError::Osc52(e.to_string()))?;

        Ok(())
    }

    fn copy_system(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::System(e.to_string()))?;

        Ok(())
    }
}

/// OSC 52 format: ESC ] 52 ; c ; <base64-data> ESC \
fn osc52_sequence(text: &str) -> String {
    use base64::Engine;

    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Clipboard operation errors.
#[derive(Debug)]
pub enum ClipboardError {
    /// OSC 52 write failed.
    Osc52(String),
    /// System clipboard operation failed.
    System(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Osc52(msg) => write!(f, "OSC 52 clipboard failed: {msg}"),
            ClipboardError::System(msg) => write!(f, "System clipboard failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}
