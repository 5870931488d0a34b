//! Mapping records
//!
//! A [`MappingRecord`] pairs free-text `source` and `target` values under a
//! store-assigned [`MappingId`].

use crate::error::ParseFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label shown in the grid for records without a target
pub const GRID_PLACEHOLDER: &str = "?";

/// Store-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingId(pub u64);

impl MappingId {
    /// First id handed out by an empty store
    pub const FIRST: Self = Self(1);

    /// Raw numeric value
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MappingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for MappingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for MappingId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One source → target pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappingRecord {
    /// Unique within its store, never reused
    pub id: MappingId,

    /// Source text
    pub source: String,

    /// Target text, may be empty
    pub target: String,
}

impl MappingRecord {
    /// Create a record
    #[inline]
    pub fn new(id: impl Into<MappingId>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Text shown for this record: the target, or the source when the
    /// target is empty
    #[inline]
    #[must_use]
    pub fn display_key(&self) -> &str {
        if self.target.is_empty() {
            &self.source
        } else {
            &self.target
        }
    }

    /// Grid cell label: the target, or [`GRID_PLACEHOLDER`]
    #[inline]
    #[must_use]
    pub fn grid_label(&self) -> &str {
        if self.target.is_empty() {
            GRID_PLACEHOLDER
        } else {
            &self.target
        }
    }

    /// Read a field
    #[inline]
    #[must_use]
    pub fn field(&self, field: MappingField) -> &str {
        match field {
            MappingField::Source => &self.source,
            MappingField::Target => &self.target,
        }
    }

    /// Overwrite a field
    #[inline]
    pub fn set_field(&mut self, field: MappingField, value: impl Into<String>) {
        match field {
            MappingField::Source => self.source = value.into(),
            MappingField::Target => self.target = value.into(),
        }
    }
}

impl fmt::Display for MappingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} → {}", self.id, self.source, self.target)
    }
}

/// Editable record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingField {
    /// The `source` text
    Source,

    /// The `target` text
    Target,
}

impl MappingField {
    /// Lowercase field name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

impl fmt::Display for MappingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MappingField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" | "src" => Ok(Self::Source),
            "target" | "out" => Ok(Self::Target),
            _ => Err(ParseFieldError::new(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_key_prefers_target() {
        let record = MappingRecord::new(1, "1", "45");
        assert_eq!(record.display_key(), "45");
    }

    #[test]
    fn display_key_falls_back_to_source() {
        let record = MappingRecord::new(5, "5", "");
        assert_eq!(record.display_key(), "5");
    }

    #[test]
    fn grid_label_uses_placeholder_not_source() {
        let record = MappingRecord::new(5, "5", "");
        assert_eq!(record.grid_label(), GRID_PLACEHOLDER);
        assert_eq!(MappingRecord::new(1, "1", "45").grid_label(), "45");
    }

    #[test]
    fn set_field_writes_the_named_field() {
        let mut record = MappingRecord::new(1, "1", "45");
        record.set_field(MappingField::Target, "99");
        record.set_field(MappingField::Source, "a");

        assert_eq!(record.field(MappingField::Source), "a");
        assert_eq!(record.field(MappingField::Target), "99");
    }

    #[test]
    fn field_parses_names_and_aliases() {
        assert_eq!("source".parse::<MappingField>(), Ok(MappingField::Source));
        assert_eq!("Src".parse::<MappingField>(), Ok(MappingField::Source));
        assert_eq!(" target ".parse::<MappingField>(), Ok(MappingField::Target));
        assert_eq!("out".parse::<MappingField>(), Ok(MappingField::Target));
        assert!("weight".parse::<MappingField>().is_err());
    }

    #[test]
    fn id_parses_and_displays() {
        let id: MappingId = "17".parse().unwrap();
        assert_eq!(id, MappingId(17));
        assert_eq!(id.to_string(), "17");
        assert_eq!(id.next(), MappingId(18));
    }

    #[test]
    fn record_serializes_with_plain_id() {
        let json = serde_json::to_value(MappingRecord::new(2, "2", "50")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 2, "source": "2", "target": "50"}));
    }
}
