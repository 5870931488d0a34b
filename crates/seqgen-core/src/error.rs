//! Error types for seqgen core
//!
//! Store operations are total: unknown ids and empty stores are no-ops.
//! Reading a field name from text can fail, and so can reserving room for
//! a sequence longer than memory allows.

/// A field name other than `source` or `target`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mapping field '{name}', expected 'source' or 'target'")]
pub struct ParseFieldError {
    /// The rejected input
    pub name: String,
}

impl ParseFieldError {
    /// Create error for rejected field name
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A sequence too long to allocate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot allocate a sequence of {length} entries")]
pub struct CapacityError {
    /// The requested length
    pub length: usize,
    #[source]
    source: std::collections::TryReserveError,
}

impl CapacityError {
    /// Create error for a failed reservation of `length` entries
    #[inline]
    #[must_use]
    pub fn new(length: usize, source: std::collections::TryReserveError) -> Self {
        Self { length, source }
    }
}
