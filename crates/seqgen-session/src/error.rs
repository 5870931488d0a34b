//! Error types for seqgen sessions
//!
//! Provides error handling for:
//! - Shell lines that do not parse into a command
//! - Clipboard sinks rejecting copied text
//! - Sequence lengths too large to allocate
//!
//! None of these end a session; the shell reports them and keeps reading.

use seqgen_core::{CapacityError, ParseFieldError};

/// Main session error type
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Shell input did not parse
    #[error("invalid command: {0}")]
    Command(#[from] CommandError),

    /// Copy to clipboard failed
    #[error("copy failed: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Nothing has been generated yet
    #[error("no sequence generated yet")]
    NoResult,

    /// Sequence length exceeds available memory
    #[error("generation failed: {0}")]
    Capacity(#[from] CapacityError),
}

impl SessionError {
    /// Check if repeating the same command may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Clipboard(e) => e.is_retryable(),
            Self::Command(_) | Self::NoResult | Self::Capacity(_) => false,
        }
    }
}

/// Shell command parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Blank input line
    #[error("empty command")]
    Empty,

    /// Unrecognized command word
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    /// Required argument absent
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        /// Command word
        command: &'static str,
        /// Description of the missing argument
        argument: &'static str,
    },

    /// Id argument is not a number
    #[error("'{0}' is not a mapping id")]
    InvalidId(String),

    /// Length argument has no leading integer
    #[error("'{0}' is not a sequence length")]
    InvalidLength(String),

    /// Mapping pair lacks the `=` separator
    #[error("mapping '{0}' must look like SOURCE=TARGET")]
    InvalidMapping(String),

    /// Field argument is not `source` or `target`
    #[error(transparent)]
    InvalidField(#[from] ParseFieldError),
}

/// Clipboard sink failures
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Underlying writer failed
    #[error("clipboard write failed, copy the text manually: {0}")]
    Io(#[from] std::io::Error),

    /// Sink refused the text
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

impl ClipboardError {
    /// Interrupted writes may succeed on retry
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
            ),
            Self::Unavailable(_) => true,
        }
    }
}
