//! Ordered mapping store
//!
//! Provides [`MappingStore`], the insertion-ordered collection of
//! [`MappingRecord`]s that sequences are drawn from.

use crate::record::{MappingField, MappingId, MappingRecord};
use serde::Serialize;

/// Seed records installed on creation and by [`MappingStore::reset`]
pub const SEED_MAPPINGS: [(u64, &str, &str); 4] =
    [(1, "1", "45"), (2, "2", "50"), (3, "3", "55"), (4, "4", "60")];

/// Insertion-ordered mapping records
///
/// Ids are unique and never reused: [`add`](Self::add) issues one past the
/// highest id this store has ever handed out, so removing the newest record
/// does not free its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingStore {
    /// Records in display order
    records: Vec<MappingRecord>,

    /// Highest id ever issued since the last reset
    high_water: Option<MappingId>,
}

impl MappingStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            high_water: None,
        }
    }

    /// Create store holding the four seed records
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.reset();
        store
    }

    /// Append a new record and return its id
    ///
    /// The source defaults to the 1-based position the record lands in;
    /// the target starts empty.
    pub fn add(&mut self) -> MappingId {
        let id = self.next_id();
        let source = (self.records.len() + 1).to_string();

        self.records.push(MappingRecord::new(id, source, String::new()));
        self.high_water = Some(id);

        tracing::debug!(%id, "added mapping");
        id
    }

    /// Set `field` on the record with `id`
    ///
    /// Returns `false` without touching anything if no record matches.
    pub fn update(&mut self, id: MappingId, field: MappingField, value: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.set_field(field, value);
                true
            }
            None => {
                tracing::debug!(%id, %field, "update ignored, no such mapping");
                false
            }
        }
    }

    /// Remove the record with `id`
    ///
    /// Returns the removed record, or `None` if no record matches.
    pub fn remove(&mut self, id: MappingId) -> Option<MappingRecord> {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            tracing::debug!(%id, "remove ignored, no such mapping");
            return None;
        };
        Some(self.records.remove(pos))
    }

    /// Replace every record with the seed set
    pub fn reset(&mut self) {
        self.records = SEED_MAPPINGS
            .iter()
            .map(|&(id, source, target)| MappingRecord::new(id, source, target))
            .collect();
        self.high_water = self.records.iter().map(|r| r.id).max();
    }

    /// Lookup record by id
    #[must_use]
    pub fn get(&self, id: MappingId) -> Option<&MappingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records in display order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[MappingRecord] {
        &self.records
    }

    /// Iterate records in display order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, MappingRecord> {
        self.records.iter()
    }

    /// Record count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&self) -> MappingId {
        let current_max = self.records.iter().map(|r| r.id).max();
        current_max
            .max(self.high_water)
            .map_or(MappingId::FIRST, MappingId::next)
    }
}

impl Default for MappingStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl<'a> IntoIterator for &'a MappingStore {
    type Item = &'a MappingRecord;
    type IntoIter = std::slice::Iter<'a, MappingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
