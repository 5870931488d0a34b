//! Session configuration

use seqgen_core::DEFAULT_SEQUENCE_LENGTH;
use std::time::Duration;

/// Pause shown as "Generating..." before results appear
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(400);

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Sequence length at start and after reset
    pub sequence_length: usize,
    /// Presentation delay before results are shown, zero to disable
    pub generation_delay: Duration,
    /// Seed for reproducible draws, entropy when unset
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With initial sequence length
    #[inline]
    #[must_use]
    pub fn with_sequence_length(mut self, length: usize) -> Self {
        self.sequence_length = length;
        self
    }

    /// With presentation delay
    #[inline]
    #[must_use]
    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    /// With fixed random seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            generation_delay: DEFAULT_GENERATION_DELAY,
            seed: None,
        }
    }
}
