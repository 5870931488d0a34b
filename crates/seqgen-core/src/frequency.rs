//! Frequency tally over display keys
//!
//! Derived view of a [`SequenceResult`]: how often each display key was
//! drawn, its share of the sequence and its bar height relative to the most
//! frequent key.

use crate::generator::SequenceResult;
use indexmap::IndexMap;
use serde::Serialize;

/// Count and share for one display key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    /// Display key
    pub key: String,

    /// Occurrences in the sequence
    pub count: usize,

    /// `100 × count / total`, rounded to one decimal
    pub percent: f64,

    /// `count / max_count`, in `(0, 1]`
    pub bar_ratio: f64,
}

impl FrequencyEntry {
    /// Percent with exactly one decimal, e.g. `"33.3"`
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.1}", self.percent)
    }
}

/// Per display key counts for a sequence
///
/// Keys keep the order of their first appearance in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrequencyTally {
    entries: IndexMap<String, FrequencyEntry>,
    total: usize,
    max_count: usize,
}

impl FrequencyTally {
    /// Tally display keys of `result`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(result: &SequenceResult) -> Self {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for key in result.display_keys() {
            *counts.entry(key).or_insert(0) += 1;
        }

        let total = result.len();
        let max_count = counts.values().copied().max().unwrap_or(0);

        let entries = counts
            .into_iter()
            .map(|(key, count)| {
                let entry = FrequencyEntry {
                    key: key.to_owned(),
                    count,
                    percent: round_tenth(count as f64 * 100.0 / total as f64),
                    bar_ratio: count as f64 / max_count as f64,
                };
                (entry.key.clone(), entry)
            })
            .collect();

        Self {
            entries,
            total,
            max_count,
        }
    }

    /// Entry for `key`
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FrequencyEntry> {
        self.entries.get(key)
    }

    /// Entries in first-appearance order
    #[inline]
    pub fn iter(&self) -> indexmap::map::Values<'_, String, FrequencyEntry> {
        self.entries.values()
    }

    /// Number of distinct keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was tallied
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the tallied sequence
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Highest count across keys, `0` for an empty sequence
    #[inline]
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.max_count
    }
}

impl<'a> IntoIterator for &'a FrequencyTally {
    type Item = &'a FrequencyEntry;
    type IntoIter = indexmap::map::Values<'a, String, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
