//! Repository Implementations
//!
//! Concrete implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgDogRepository** - PostgreSQL-backed dog catalog
//! - **InMemoryDogRepository** - process-local dog catalog
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sqlx::PgPool;
//! use crate::domain::DogRepository;
//! use crate::infrastructure::repositories::{InMemoryDogRepository, PgDogRepository};
//!
//! fn setup_repository(pool: Option<PgPool>) -> Arc<dyn DogRepository> {
//!     match pool {
//!         Some(pool) => Arc::new(PgDogRepository::new(pool)),
//!         None => Arc::new(InMemoryDogRepository::new()),
//!     }
//! }
//! ```

pub mod dog_repository;
pub mod in_memory_dog_repository;

pub use dog_repository::PgDogRepository;
pub use in_memory_dog_repository::InMemoryDogRepository;
