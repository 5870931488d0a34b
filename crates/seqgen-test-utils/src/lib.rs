//! Testing utilities for seqgen workspace
//!
//! Shared fixtures: scripted index sources, prepared sessions and a
//! clipboard that always fails.

#![allow(missing_docs)]

use seqgen_core::{FixedIndex, IndexSource};
use seqgen_session::{Clipboard, ClipboardError, Session, SessionConfig};
use std::time::Duration;

/// Replays a fixed list of indices, wrapping around
#[derive(Debug, Clone)]
pub struct ScriptedIndex {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndex {
    pub fn new(script: &[usize]) -> Self {
        assert!(!script.is_empty(), "script needs at least one index");
        Self {
            script: script.to_vec(),
            cursor: 0,
        }
    }
}

impl IndexSource for ScriptedIndex {
    fn pick(&mut self, len: usize) -> usize {
        let index = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        index % len
    }
}

/// Clipboard whose every write fails
#[derive(Debug, Clone, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard in test".to_string()))
    }
}

/// Config with no presentation delay
pub fn instant_config() -> SessionConfig {
    SessionConfig::new().with_generation_delay(Duration::ZERO)
}

/// Seeded session that always draws the first mapping
pub fn first_index_session() -> Session<FixedIndex> {
    Session::with_source(instant_config(), FixedIndex::new(0))
}

/// Seeded session replaying `script`
pub fn scripted_session(script: &[usize]) -> Session<ScriptedIndex> {
    Session::with_source(instant_config(), ScriptedIndex::new(script))
}
