//! # Domain Layer
//!
//! The domain layer contains the core business types of the dog catalog.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: The `Dog` record and its repository trait
//! - **value_objects**: Immutable value types (sort key, sort direction)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Closed enumerations instead of stringly-typed lookups

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
