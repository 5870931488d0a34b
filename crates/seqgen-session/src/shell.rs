//! Command shell
//!
//! Applies [`Command`]s to a [`Session`] and renders the view each command
//! calls for. Generation runs synchronously; the configured delay is only
//! awaited afterwards, before the results are handed back for display.

use crate::clipboard::Clipboard;
use crate::command::{Command, HELP};
use crate::error::SessionError;
use crate::session::Session;
use crate::view;
use seqgen_core::{IndexSource, RandomIndex};

/// Text produced by one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellReply {
    /// Rendered output
    pub output: String,
    /// Whether the shell should stop reading
    pub quit: bool,
}

impl ShellReply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

/// Session plus clipboard, driven one command at a time
#[derive(Debug)]
pub struct Shell<C, S = RandomIndex> {
    session: Session<S>,
    clipboard: C,
}

impl<C: Clipboard, S: IndexSource> Shell<C, S> {
    /// Create shell over a session and clipboard sink
    #[inline]
    pub fn new(session: Session<S>, clipboard: C) -> Self {
        Self { session, clipboard }
    }

    /// Underlying session
    #[inline]
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Clipboard sink
    #[inline]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Apply `command` and render its reply
    ///
    /// # Errors
    /// Returns [`SessionError`] when copying fails, there is nothing to copy
    /// or the sequence length cannot be allocated. The session is left
    /// unchanged in each case.
    pub async fn execute(&mut self, command: Command) -> Result<ShellReply, SessionError> {
        tracing::debug!("Executing command: {}", command.preview());
        let edits = command.edits_mappings();

        let mut reply = match command {
            Command::List => ShellReply::text(view::render_mappings(self.session.store())),
            Command::Add => {
                let id = self.session.add_mapping();
                tracing::info!(%id, "mapping added");
                ShellReply::text(String::new())
            }
            Command::Set { id, field, value } => {
                self.session.update_mapping(id, field, value);
                ShellReply::text(String::new())
            }
            Command::Remove { id } => {
                self.session.remove_mapping(id);
                ShellReply::text(String::new())
            }
            Command::Length { length } => {
                self.session.set_sequence_length(length);
                ShellReply::text(format!("Sequence length: {length}\n"))
            }
            Command::Generate => self.generate().await?,
            Command::Show => ShellReply::text(view::render_results(self.session.result())),
            Command::Copy => {
                let text = self.session.copy_to_clipboard(&mut self.clipboard)?;
                ShellReply::text(format!("Copied! {text}\n"))
            }
            Command::Reset => {
                self.session.reset();
                ShellReply::text(view::render_results(None))
            }
            Command::Help => ShellReply::text(HELP),
            Command::Quit => ShellReply {
                output: String::new(),
                quit: true,
            },
        };

        if edits {
            reply
                .output
                .push_str(&view::render_mappings(self.session.store()));
        }
        Ok(reply)
    }

    async fn generate(&mut self) -> Result<ShellReply, SessionError> {
        if self.session.generate_sequence()?.is_none() {
            return Ok(ShellReply::text("No mappings to draw from. Add one first.\n"));
        }

        let delay = self.session.config().generation_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(ShellReply::text(view::render_results(self.session.result())))
    }
}
