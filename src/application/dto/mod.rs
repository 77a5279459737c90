//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CreateDogRequest, ListDogsQueryParams};
pub use response::DogResponse;
