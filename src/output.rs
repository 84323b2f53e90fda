//! Delivery of the rendered table.

use std::fmt;
use std::io::Write;

use thiserror::Error;

/// Error type for delivering output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The system clipboard could not be opened or written.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Where the final table goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Layout-driven text copied to the system clipboard.
    #[default]
    Clipboard,
    /// Generic grid printed to stdout.
    Console,
}

impl OutputTarget {
    /// Chooses the target from the `--console` flag.
    #[must_use]
    pub const fn from_console_flag(console: bool) -> Self {
        if console { Self::Console } else { Self::Clipboard }
    }

    /// Delivers `text` to this target.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if the clipboard is unavailable or stdout
    /// cannot be written.
    pub fn emit(self, text: &str) -> Result<(), OutputError> {
        match self {
            Self::Clipboard => copy_to_clipboard(text, ClipboardHold::for_platform()),
            Self::Console => write_table(&mut std::io::stdout().lock(), text),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clipboard => write!(f, "clipboard"),
            Self::Console => write!(f, "console"),
        }
    }
}

/// How long the process keeps ownership of the copied text.
///
/// On X11 and Wayland the clipboard content lives only as long as its
/// owner, so exiting right after copying would leave the clipboard empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardHold {
    /// Set the text and return; the platform keeps it.
    Release,
    /// Block until another application replaces the clipboard content.
    UntilReplaced,
}

impl ClipboardHold {
    /// The hold the current platform needs.
    #[must_use]
    pub const fn for_platform() -> Self {
        if cfg!(target_os = "linux") {
            Self::UntilReplaced
        } else {
            Self::Release
        }
    }
}

fn copy_to_clipboard(text: &str, hold: ClipboardHold) -> Result<(), OutputError> {
    let mut clipboard = arboard::Clipboard::new()?;
    match hold {
        ClipboardHold::Release => clipboard.set_text(text)?,
        ClipboardHold::UntilReplaced => {
            tracing::info!("Table copied; keeping it on the clipboard until something else is copied");
            set_text_and_wait(&mut clipboard, text)?;
        }
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn set_text_and_wait(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_text_and_wait(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Writes `text` followed by a newline and flushes.
///
/// # Errors
///
/// Returns [`OutputError::Write`] if the writer fails.
pub fn write_table<W: Write>(writer: &mut W, text: &str) -> Result<(), OutputError> {
    writeln!(writer, "{text}")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_flag_selects_target() {
        assert_eq!(OutputTarget::from_console_flag(true), OutputTarget::Console);
        assert_eq!(OutputTarget::from_console_flag(false), OutputTarget::Clipboard);
    }

    #[test]
    fn clipboard_is_default() {
        assert_eq!(OutputTarget::default(), OutputTarget::Clipboard);
    }

    #[test]
    fn display_names_target() {
        assert_eq!(OutputTarget::Clipboard.to_string(), "clipboard");
        assert_eq!(OutputTarget::Console.to_string(), "console");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_holds_clipboard_until_replaced() {
        assert_eq!(ClipboardHold::for_platform(), ClipboardHold::UntilReplaced);
    }

    #[cfg(not(target_os = "linux"))]
    #[test]
    fn other_platforms_release_clipboard() {
        assert_eq!(ClipboardHold::for_platform(), ClipboardHold::Release);
    }

    #[test]
    fn write_table_appends_newline() {
        let mut buffer = Vec::new();
        write_table(&mut buffer, "+---+\n| a |\n+---+").unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "+---+\n| a |\n+---+\n");
    }

    #[test]
    fn write_failure_is_reported() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = write_table(&mut Broken, "x").unwrap_err();

        assert!(matches!(err, OutputError::Write(_)));
    }
}
