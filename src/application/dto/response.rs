//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::Dog;

/// Dog response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogResponse {
    pub name: String,
    pub color: String,
    pub tail_length: i32,
    pub weight: i32,
}

impl From<Dog> for DogResponse {
    fn from(dog: Dog) -> Self {
        Self {
            name: dog.name,
            color: dog.color,
            tail_length: dog.tail_length,
            weight: dog.weight,
        }
    }
}
