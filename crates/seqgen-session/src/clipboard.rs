//! Clipboard sinks
//!
//! The session hands the token list to a [`Clipboard`]. Terminals receive
//! it as an OSC 52 escape sequence; tests use [`MemoryClipboard`].

use crate::error::ClipboardError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;

/// Destination for copied text
pub trait Clipboard {
    /// Replace clipboard contents with `text`
    ///
    /// # Errors
    /// Returns [`ClipboardError`] if the sink cannot accept the text.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// In-process clipboard holding the last copied text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Create empty clipboard
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text
    #[inline]
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Sets the terminal clipboard with an OSC 52 sequence
///
/// Terminals that ignore OSC 52 drop the sequence silently, so the copied
/// text should also be shown to the user.
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Write sequences to `out`
    #[inline]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<std::io::Stdout> {
    /// Write sequences to stdout
    #[inline]
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        write!(self.out, "{}", osc52_sequence(text))?;
        self.out.flush()?;
        Ok(())
    }
}

/// OSC 52 "set clipboard" sequence for `text`, BEL terminated
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
