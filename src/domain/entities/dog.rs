//! Dog entity and repository trait.
//!
//! Maps to the `dogs` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A single record in the dog catalog.
///
/// Maps to the `dogs` table:
/// - name: TEXT PRIMARY KEY
/// - color: TEXT NOT NULL
/// - tail_length: INTEGER NOT NULL CHECK (tail_length >= 0)
/// - weight: INTEGER NOT NULL CHECK (weight >= 0)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Natural key, case-sensitive
    pub name: String,

    /// Free-form color description
    pub color: String,

    /// Tail length, never negative once persisted
    pub tail_length: i32,

    /// Weight, never negative once persisted
    pub weight: i32,
}

impl Dog {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        tail_length: i32,
        weight: i32,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            tail_length,
            weight,
        }
    }
}

/// Repository trait for the dog catalog.
///
/// Implementations own their locking: `insert` must check the name and
/// write the record atomically, so two racing inserts of one name never
/// both succeed.
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// Return every record. Order is unspecified.
    async fn list_all(&self) -> Result<Vec<Dog>, AppError>;

    /// Total number of records.
    async fn count(&self) -> Result<i64, AppError>;

    /// Find a record by its exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Dog>, AppError>;

    /// Insert a new record.
    ///
    /// Fails with `AppError::Conflict` when the name is already taken.
    async fn insert(&self, dog: &Dog) -> Result<Dog, AppError>;
}
