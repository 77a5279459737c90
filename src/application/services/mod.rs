//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **DogService**: Catalog listing (sort, page) and validated creation

pub mod dog_service;

pub use dog_service::{CreateDogDto, DogError, DogPage, DogService, DogServiceImpl};
