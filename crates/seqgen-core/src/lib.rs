//! seqgen Core
//!
//! Source → target mapping tables and random sequences drawn from them.
//!
//! # Overview
//!
//! The core provides:
//! - **MappingStore**: ordered mapping records with never-reused ids
//! - **SequenceGenerator**: uniform sampling with replacement
//! - **FrequencyTally**: per display key counts, percentages and bar scale
//!
//! # Example
//!
//! ```rust
//! use seqgen_core::{FixedIndex, FrequencyTally, MappingStore, SequenceGenerator};
//!
//! let store = MappingStore::seeded();
//! let mut generator = SequenceGenerator::new(FixedIndex::new(0));
//!
//! let result = generator.generate(&store, 10).unwrap().unwrap();
//! let tally = FrequencyTally::compute(&result);
//!
//! assert_eq!(tally.get("45").unwrap().count, 10);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod frequency;
pub mod generator;
pub mod record;
pub mod store;

// Re-exports
pub use error::{CapacityError, ParseFieldError};
pub use frequency::{FrequencyEntry, FrequencyTally};
pub use generator::{FixedIndex, IndexSource, RandomIndex, SequenceGenerator, SequenceResult};
pub use record::{MappingField, MappingId, MappingRecord};
pub use store::MappingStore;

/// Default number of entries in a generated sequence
pub const DEFAULT_SEQUENCE_LENGTH: usize = 10;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for mapping and sampling
    pub use crate::{
        FrequencyEntry, FrequencyTally, IndexSource, MappingField, MappingId, MappingRecord,
        MappingStore, RandomIndex, SequenceGenerator, SequenceResult,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
