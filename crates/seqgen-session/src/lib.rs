//! seqgen Session
//!
//! The interactive layer over `seqgen-core`:
//! - Owns one user's mappings, sequence length and latest result
//! - Maps each user action to a [`Command`]
//! - Renders the mapping table, token list, grid and frequency chart as text
//! - Copies the token list to a clipboard sink
//!
//! # Example
//!
//! ```rust
//! use seqgen_core::FixedIndex;
//! use seqgen_session::{MemoryClipboard, Session, SessionConfig};
//!
//! let mut session = Session::with_source(SessionConfig::new(), FixedIndex::new(0));
//! session.set_sequence_length(3);
//! session.generate_sequence().unwrap();
//!
//! let mut clipboard = MemoryClipboard::new();
//! let text = session.copy_to_clipboard(&mut clipboard).unwrap();
//! assert_eq!(text, "45, 45, 45");
//! ```

#![warn(unreachable_pub)]

pub mod clipboard;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod shell;
pub mod view;

// Re-exports for convenience
pub use clipboard::{Clipboard, MemoryClipboard, Osc52Clipboard};
pub use command::{clamp_length, Command};
pub use config::SessionConfig;
pub use error::{ClipboardError, CommandError, SessionError};
pub use session::Session;
pub use shell::{Shell, ShellReply};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a session
    pub use crate::{
        Clipboard, Command, MemoryClipboard, Session, SessionConfig, SessionError, Shell,
        ShellReply,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
