//! Sequence generation
//!
//! [`SequenceGenerator`] draws records uniformly, independently and with
//! replacement from a [`MappingStore`]. The draw itself goes through an
//! [`IndexSource`] so tests can pin the outcome.

use crate::error::CapacityError;
use crate::record::MappingRecord;
use crate::store::MappingStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Source of uniform indices
pub trait IndexSource {
    /// Pick an index in `0..len`
    ///
    /// Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform indices backed by [`StdRng`]
#[derive(Debug, Clone)]
pub struct RandomIndex {
    rng: StdRng,
}

impl RandomIndex {
    /// Seed from operating system entropy
    #[inline]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed deterministically
    #[inline]
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise
    #[inline]
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Default for RandomIndex {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl IndexSource for RandomIndex {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always yields the same index, wrapped into range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndex(usize);

impl FixedIndex {
    /// Create source pinned to `index`
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }
}

impl IndexSource for FixedIndex {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// An ordered, generated sequence of record copies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceResult {
    entries: Vec<MappingRecord>,
}

impl SequenceResult {
    /// Wrap already drawn entries
    #[inline]
    #[must_use]
    pub fn from_entries(entries: Vec<MappingRecord>) -> Self {
        Self { entries }
    }

    /// Drawn entries in order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[MappingRecord] {
        &self.entries
    }

    /// Iterate drawn entries
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, MappingRecord> {
        self.entries.iter()
    }

    /// Sequence length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if sequence is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display key of every entry, in order
    pub fn display_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(MappingRecord::display_key)
    }

    /// Display keys joined with `", "`
    #[must_use]
    pub fn token_text(&self) -> String {
        self.display_keys().collect::<Vec<_>>().join(", ")
    }
}

impl<'a> IntoIterator for &'a SequenceResult {
    type Item = &'a MappingRecord;
    type IntoIter = std::slice::Iter<'a, MappingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Draws sequences from a store
#[derive(Debug, Clone, Default)]
pub struct SequenceGenerator<S = RandomIndex> {
    source: S,
}

impl<S: IndexSource> SequenceGenerator<S> {
    /// Create generator over an index source
    #[inline]
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Draw `length` records from `store`
    ///
    /// Returns `Ok(None)` when the store is empty. A zero `length` yields
    /// an empty sequence.
    ///
    /// # Errors
    /// Returns [`CapacityError`] when `length` entries cannot be allocated.
    pub fn generate(
        &mut self,
        store: &MappingStore,
        length: usize,
    ) -> Result<Option<SequenceResult>, CapacityError> {
        if store.is_empty() {
            tracing::debug!(length, "generation skipped, store is empty");
            return Ok(None);
        }

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(length)
            .map_err(|e| CapacityError::new(length, e))?;

        let records = store.records();
        entries.extend((0..length).map(|_| records[self.source.pick(records.len())].clone()));

        tracing::info!(length, pool = records.len(), "generated sequence");
        Ok(Some(SequenceResult::from_entries(entries)))
    }

    /// Borrow the index source
    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MappingField;

    #[test]
    fn fixed_index_repeats_first_record() {
        let store = MappingStore::seeded();
        let mut generator = SequenceGenerator::new(FixedIndex::new(0));

        let result = generator.generate(&store, 10).unwrap().unwrap();
        assert_eq!(result.len(), 10);
        assert!(result.iter().all(|r| *r == MappingRecord::new(1, "1", "45")));
    }

    #[test]
    fn fixed_index_wraps_into_range() {
        let store = MappingStore::seeded();
        let mut generator = SequenceGenerator::new(FixedIndex::new(6));

        let result = generator.generate(&store, 3).unwrap().unwrap();
        assert!(result.iter().all(|r| r.target == "55"));
    }

    #[test]
    fn empty_store_produces_nothing() {
        let store = MappingStore::new();
        let mut generator = SequenceGenerator::new(RandomIndex::seeded(7));

        assert_eq!(generator.generate(&store, 10), Ok(None));
    }

    #[test]
    fn zero_length_is_empty_sequence() {
        let store = MappingStore::seeded();
        let mut generator = SequenceGenerator::new(RandomIndex::seeded(7));

        let result = generator.generate(&store, 0).unwrap().unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn same_seed_same_sequence() {
        let store = MappingStore::seeded();
        let a = SequenceGenerator::new(RandomIndex::seeded(42)).generate(&store, 50);
        let b = SequenceGenerator::new(RandomIndex::seeded(42)).generate(&store, 50);

        assert_eq!(a, b);
    }

    #[test]
    fn entries_are_copies_not_live_views() {
        let mut store = MappingStore::seeded();
        let mut generator = SequenceGenerator::new(FixedIndex::new(0));
        let result = generator.generate(&store, 2).unwrap().unwrap();

        store.update(crate::MappingId(1), MappingField::Target, "changed");
        assert_eq!(result.entries()[0].target, "45");
    }

    #[test]
    fn every_record_gets_drawn_eventually() {
        let store = MappingStore::seeded();
        let mut generator = SequenceGenerator::new(RandomIndex::seeded(3));
        let result = generator.generate(&store, 400).unwrap().unwrap();

        for record in &store {
            assert!(result.iter().any(|r| r == record), "never drew {record}");
        }
    }

    #[test]
    fn token_text_joins_display_keys() {
        let result = SequenceResult::from_entries(vec![
            MappingRecord::new(1, "1", "45"),
            MappingRecord::new(5, "5", ""),
            MappingRecord::new(2, "2", "50"),
        ]);
        assert_eq!(result.token_text(), "45, 5, 50");
    }

    #[test]
    fn unallocatable_length_is_an_error() {
        let store = MappingStore::seeded();
        let mut generator = SequenceGenerator::new(FixedIndex::new(0));

        let err = generator.generate(&store, usize::MAX).unwrap_err();
        assert_eq!(err.length, usize::MAX);

        let result = generator.generate(&store, 2).unwrap().unwrap();
        assert_eq!(result.len(), 2);
    }
}
