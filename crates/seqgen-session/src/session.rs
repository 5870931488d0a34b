//! Mapping session
//!
//! A [`Session`] owns everything one user works with: the mapping store,
//! the configured sequence length, the generator and the latest result.
//! Front ends call its methods for each user action and re-read state
//! afterwards to render.

use crate::clipboard::Clipboard;
use crate::config::SessionConfig;
use crate::error::{CommandError, SessionError};
use seqgen_core::{
    FrequencyTally, IndexSource, MappingField, MappingId, MappingRecord, MappingStore, RandomIndex,
    SequenceGenerator, SequenceResult,
};

/// State of one interactive session
#[derive(Debug, Clone)]
pub struct Session<S = RandomIndex> {
    /// Configuration the session started with
    config: SessionConfig,
    /// Mapping records
    store: MappingStore,
    /// Sampler
    generator: SequenceGenerator<S>,
    /// Length of the next generated sequence
    sequence_length: usize,
    /// Latest generated sequence
    result: Option<SequenceResult>,
}

impl Session<RandomIndex> {
    /// Create session drawing from `StdRng`, seeded per `config`
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let source = RandomIndex::from_seed_option(config.seed);
        Self::with_source(config, source)
    }
}

impl Default for Session<RandomIndex> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<S: IndexSource> Session<S> {
    /// Create session over a custom index source
    #[must_use]
    pub fn with_source(config: SessionConfig, source: S) -> Self {
        Self {
            sequence_length: config.sequence_length,
            config,
            store: MappingStore::seeded(),
            generator: SequenceGenerator::new(source),
            result: None,
        }
    }

    /// Session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Mapping records in display order
    #[inline]
    #[must_use]
    pub fn list_mappings(&self) -> &[MappingRecord] {
        self.store.records()
    }

    /// Mapping store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &MappingStore {
        &self.store
    }

    /// Append a blank mapping
    pub fn add_mapping(&mut self) -> MappingId {
        self.store.add()
    }

    /// Edit a mapping field, ignoring unknown ids
    pub fn update_mapping(
        &mut self,
        id: MappingId,
        field: MappingField,
        value: impl Into<String>,
    ) -> bool {
        self.store.update(id, field, value)
    }

    /// Delete a mapping, ignoring unknown ids
    pub fn remove_mapping(&mut self, id: MappingId) -> Option<MappingRecord> {
        self.store.remove(id)
    }

    /// Replace every mapping with `SOURCE=TARGET` pairs, in order
    ///
    /// Both sides are trimmed. New ids continue past the removed ones.
    ///
    /// # Errors
    /// Returns [`CommandError::InvalidMapping`] for a pair without `=`; the
    /// store is left untouched.
    pub fn replace_mappings<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), SessionError> {
        let parsed = pairs
            .into_iter()
            .map(|pair| {
                pair.split_once('=')
                    .map(|(source, target)| (source.trim(), target.trim()))
                    .ok_or_else(|| CommandError::InvalidMapping(pair.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let existing: Vec<MappingId> = self.store.iter().map(|r| r.id).collect();
        for id in existing {
            self.store.remove(id);
        }
        for (source, target) in parsed {
            let id = self.store.add();
            self.store.update(id, MappingField::Source, source);
            self.store.update(id, MappingField::Target, target);
        }
        tracing::info!(count = self.store.len(), "mappings replaced");
        Ok(())
    }

    /// Restore seed mappings and initial length, clear the result
    pub fn reset(&mut self) {
        self.store.reset();
        self.sequence_length = self.config.sequence_length;
        self.result = None;
        tracing::info!(length = self.sequence_length, "session reset");
    }

    /// Length of the next generated sequence
    #[inline]
    #[must_use]
    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Set length of the next generated sequence
    ///
    /// The value is trusted; callers clamp raw input first.
    #[inline]
    pub fn set_sequence_length(&mut self, length: usize) {
        self.sequence_length = length;
    }

    /// Draw a fresh sequence, replacing the previous one
    ///
    /// Returns `Ok(None)` and keeps the previous result when the store is
    /// empty.
    ///
    /// # Errors
    /// Returns [`SessionError::Capacity`] when the sequence length cannot be
    /// allocated. The previous result is kept.
    pub fn generate_sequence(&mut self) -> Result<Option<&SequenceResult>, SessionError> {
        let generated = match self.generator.generate(&self.store, self.sequence_length) {
            Ok(generated) => generated,
            Err(e) => {
                tracing::warn!("Generation failed: {}", e);
                return Err(e.into());
            }
        };
        let Some(fresh) = generated else {
            return Ok(None);
        };
        self.result = Some(fresh);
        Ok(self.result.as_ref())
    }

    /// Latest generated sequence
    #[inline]
    #[must_use]
    pub fn result(&self) -> Option<&SequenceResult> {
        self.result.as_ref()
    }

    /// Frequency tally of the latest sequence
    #[must_use]
    pub fn frequencies(&self) -> Option<FrequencyTally> {
        self.result.as_ref().map(FrequencyTally::compute)
    }

    /// Copy the latest token list to `clipboard` and return the text
    ///
    /// # Errors
    /// Returns [`SessionError::NoResult`] before the first generation and
    /// [`SessionError::Clipboard`] if the sink fails. Neither changes
    /// session state.
    pub fn copy_to_clipboard(&self, clipboard: &mut impl Clipboard) -> Result<String, SessionError> {
        let result = self.result.as_ref().ok_or(SessionError::NoResult)?;
        let text = result.token_text();

        if let Err(e) = clipboard.write_text(&text) {
            tracing::warn!("Copy to clipboard failed: {}", e);
            return Err(e.into());
        }
        Ok(text)
    }
}
