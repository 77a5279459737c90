//! # Domain Entities
//!
//! - **Dog**: A catalog record keyed by its unique name
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod dog;

pub use dog::{Dog, DogRepository};
