//! In-Memory Dog Repository
//!
//! Process-local implementation of the DogRepository trait. Backs the
//! `memory` store backend and the service tests.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Dog, DogRepository};
use crate::shared::error::AppError;

/// Dog repository holding records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDogRepository {
    dogs: RwLock<Vec<Dog>>,
}

impl InMemoryDogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `dogs`.
    ///
    /// Seeding bypasses validation so tests can set up arbitrary state.
    pub fn with_dogs(dogs: impl IntoIterator<Item = Dog>) -> Self {
        Self {
            dogs: RwLock::new(dogs.into_iter().collect()),
        }
    }

    /// Number of stored records, without going through the async trait.
    pub fn len(&self) -> usize {
        self.dogs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.dogs.read().is_empty()
    }
}

#[async_trait]
impl DogRepository for InMemoryDogRepository {
    async fn list_all(&self) -> Result<Vec<Dog>, AppError> {
        Ok(self.dogs.read().clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.dogs.read().len() as i64)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Dog>, AppError> {
        Ok(self.dogs.read().iter().find(|d| d.name == name).cloned())
    }

    async fn insert(&self, dog: &Dog) -> Result<Dog, AppError> {
        // Check and push under one write guard.
        let mut dogs = self.dogs.write();
        if dogs.iter().any(|d| d.name == dog.name) {
            return Err(AppError::Conflict(format!(
                "Dog with name '{}' already exists",
                dog.name
            )));
        }
        dogs.push(dog.clone());
        Ok(dog.clone())
    }
}
