//! Shell commands
//!
//! Each user action is one [`Command`]. Lines typed into the shell parse
//! into commands; the shell applies them to a session and re-renders.

use crate::error::CommandError;
use seqgen_core::{MappingField, MappingId};
use std::str::FromStr;

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the mapping table
    List,
    /// Append a blank mapping
    Add,
    /// Edit one field of a mapping
    Set {
        /// Mapping to edit
        id: MappingId,
        /// Field to write
        field: MappingField,
        /// New text, may be empty
        value: String,
    },
    /// Delete a mapping
    Remove {
        /// Mapping to delete
        id: MappingId,
    },
    /// Set length of the next sequence
    Length {
        /// Clamped length
        length: usize,
    },
    /// Draw a new sequence
    Generate,
    /// Show the latest results
    Show,
    /// Copy the token list to the clipboard
    Copy,
    /// Restore seed mappings and clear results
    Reset,
    /// Print command help
    Help,
    /// Leave the shell
    Quit,
}

impl Command {
    /// Short description for logs
    #[must_use]
    pub fn preview(&self) -> String {
        match self {
            Self::List => "list mappings".to_string(),
            Self::Add => "add mapping".to_string(),
            Self::Set { id, field, value } => format!("set {field} of #{id} to '{value}'"),
            Self::Remove { id } => format!("remove mapping #{id}"),
            Self::Length { length } => format!("set sequence length to {length}"),
            Self::Generate => "generate sequence".to_string(),
            Self::Show => "show results".to_string(),
            Self::Copy => "copy tokens".to_string(),
            Self::Reset => "reset session".to_string(),
            Self::Help => "show help".to_string(),
            Self::Quit => "quit".to_string(),
        }
    }

    /// Whether the command edits the mapping table
    #[inline]
    #[must_use]
    pub fn edits_mappings(&self) -> bool {
        matches!(self, Self::Add | Self::Set { .. } | Self::Remove { .. } | Self::Reset)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(CommandError::Empty);
        };

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "add" => Ok(Self::Add),
            "set" => {
                let id = parse_id("set", words.next())?;
                let field = words
                    .next()
                    .ok_or(CommandError::MissingArgument {
                        command: "set",
                        argument: "a field (source or target)",
                    })?
                    .parse()?;
                let value = words.collect::<Vec<_>>().join(" ");
                Ok(Self::Set { id, field, value })
            }
            "remove" | "rm" => Ok(Self::Remove {
                id: parse_id("remove", words.next())?,
            }),
            "length" | "len" => {
                let raw = words.next().ok_or(CommandError::MissingArgument {
                    command: "length",
                    argument: "a number",
                })?;
                let length =
                    clamp_length(raw).ok_or_else(|| CommandError::InvalidLength(raw.to_string()))?;
                Ok(Self::Length { length })
            }
            "generate" | "gen" | "g" => Ok(Self::Generate),
            "show" => Ok(Self::Show),
            "copy" => Ok(Self::Copy),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(command: &'static str, word: Option<&str>) -> Result<MappingId, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument {
        command,
        argument: "a mapping id",
    })?;
    word.parse()
        .map_err(|_| CommandError::InvalidId(word.to_string()))
}

/// Read a sequence length from raw input
///
/// Takes the leading integer the way a numeric text field does: `"12abc"`
/// is 12. Negative values clamp to 0. Returns `None` when no digits lead
/// the input or the number does not fit in `usize`.
#[must_use]
pub fn clamp_length(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }
    digits.parse().ok()
}

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  list                         show mappings
  add                          append a mapping
  set <id> <source|target> [value]
                               edit a mapping field
  remove <id>                  delete a mapping
  length <n>                   set sequence length
  generate                     draw a new sequence
  show                         show the latest sequence
  copy                         copy the sequence to the clipboard
  reset                        restore default mappings
  help                         show this help
  quit                         leave the shell
";
