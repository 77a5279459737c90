//! Sort key and direction for catalog listings.
//!
//! The set of sortable attributes is closed. Each key maps to exactly one
//! comparator; anything else is rejected at parse time.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::Dog;

/// Attribute a listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Color,
    TailLength,
    Weight,
}

impl SortKey {
    /// Attribute name as accepted on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Color => "color",
            SortKey::TailLength => "tailLength",
            SortKey::Weight => "weight",
        }
    }

    /// Compare two dogs on this attribute.
    ///
    /// Strings compare ordinally, integers numerically.
    pub fn compare(&self, a: &Dog, b: &Dog) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Color => a.color.cmp(&b.color),
            SortKey::TailLength => a.tail_length.cmp(&b.tail_length),
            SortKey::Weight => a.weight.cmp(&b.weight),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known attribute or direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortParseError {
    #[error("unknown sort attribute: {0}")]
    UnknownAttribute(String),

    #[error("unknown sort direction: {0}")]
    UnknownDirection(String),
}

impl FromStr for SortKey {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "color" => Ok(SortKey::Color),
            "tailLength" => Ok(SortKey::TailLength),
            "weight" => Ok(SortKey::Weight),
            other => Err(SortParseError::UnknownAttribute(other.to_string())),
        }
    }
}

/// Listing direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(SortParseError::UnknownDirection(other.to_string())),
        }
    }
}

/// A parsed ordering: key plus direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Parse optional raw parameters.
    ///
    /// Absent or blank values fall back to ascending by name.
    pub fn parse(sort_by: Option<&str>, direction: Option<&str>) -> Result<Self, SortParseError> {
        let key = match sort_by.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse()?,
            None => SortKey::default(),
        };
        let direction = match direction.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse()?,
            None => SortDirection::default(),
        };
        Ok(Self { key, direction })
    }

    /// Sort in place. `sort_by` is stable, so ties keep their input order
    /// in either direction.
    pub fn sort(&self, dogs: &mut [Dog]) {
        dogs.sort_by(|a, b| self.direction.apply(self.key.compare(a, b)));
    }
}
