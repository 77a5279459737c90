//! # Value Objects
//!
//! Immutable types with no identity of their own.

mod sort;

pub use sort::{SortDirection, SortKey, SortOrder, SortParseError};
