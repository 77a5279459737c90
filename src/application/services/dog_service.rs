//! Dog Service
//!
//! Validates catalog input, enforces name uniqueness, and applies sorting
//! and paging to listings. Holds no state between calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Dog, DogRepository, SortOrder};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Dog service trait
#[async_trait]
pub trait DogService: Send + Sync {
    /// List dogs ordered by `sort_by` (default `name`) in `direction`
    /// (default `asc`), returning the requested 1-based page and the
    /// total number of stored dogs.
    async fn list_dogs(
        &self,
        sort_by: Option<String>,
        direction: Option<String>,
        page_number: u32,
        page_size: u32,
    ) -> Result<DogPage, DogError>;

    /// Validate and persist a new dog.
    async fn create_dog(&self, input: Option<CreateDogDto>) -> Result<Dog, DogError>;
}

/// Create dog request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDogDto {
    pub name: Option<String>,
    pub color: String,
    pub tail_length: i32,
    pub weight: i32,
}

/// One page of a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogPage {
    pub dogs: Vec<Dog>,
    /// Count of all stored dogs, independent of paging
    pub total_count: i64,
}

/// Dog service errors
#[derive(Debug, thiserror::Error)]
pub enum DogError {
    #[error("Input is required")]
    NullInput,

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Store failure: {0}")]
    StoreFailure(String),
}

impl DogError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            DogError::NullInput => "null_input",
            DogError::InvalidArgument(_) => "invalid_argument",
            DogError::Conflict(_) => "conflict",
            DogError::StoreFailure(_) => "store_failure",
        }
    }

    fn from_store(e: AppError) -> Self {
        match e {
            AppError::Conflict(_) => DogError::Conflict("duplicate name".into()),
            e => DogError::StoreFailure(e.to_string()),
        }
    }
}

impl From<DogError> for AppError {
    fn from(e: DogError) -> Self {
        match e {
            DogError::NullInput => AppError::BadRequest("Request body is required".into()),
            DogError::InvalidArgument(msg) => AppError::Validation(msg),
            DogError::Conflict(msg) => AppError::Conflict(msg),
            DogError::StoreFailure(msg) => AppError::Internal(msg),
        }
    }
}

/// DogService implementation
pub struct DogServiceImpl<R>
where
    R: DogRepository + ?Sized,
{
    dog_repo: Arc<R>,
}

impl<R> DogServiceImpl<R>
where
    R: DogRepository + ?Sized,
{
    pub fn new(dog_repo: Arc<R>) -> Self {
        Self { dog_repo }
    }

    /// Field checks in a fixed order: name, tail length, weight.
    fn validate(input: CreateDogDto) -> Result<Dog, DogError> {
        let name = match input.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(DogError::InvalidArgument("name is required".into())),
        };
        if input.tail_length < 0 {
            return Err(DogError::InvalidArgument(
                "tail_length must not be negative".into(),
            ));
        }
        if input.weight < 0 {
            return Err(DogError::InvalidArgument("weight must not be negative".into()));
        }

        Ok(Dog {
            name,
            color: input.color,
            tail_length: input.tail_length,
            weight: input.weight,
        })
    }
}

/// Slice `[(page_number - 1) * page_size, page_number * page_size)` clipped
/// to the available length.
fn page_slice(mut dogs: Vec<Dog>, page_number: u32, page_size: u32) -> Vec<Dog> {
    let start = (page_number as usize - 1).saturating_mul(page_size as usize);
    if start >= dogs.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size as usize).min(dogs.len());
    dogs.truncate(end);
    dogs.split_off(start)
}

#[async_trait]
impl<R> DogService for DogServiceImpl<R>
where
    R: DogRepository + ?Sized + 'static,
{
    async fn list_dogs(
        &self,
        sort_by: Option<String>,
        direction: Option<String>,
        page_number: u32,
        page_size: u32,
    ) -> Result<DogPage, DogError> {
        let order = SortOrder::parse(sort_by.as_deref(), direction.as_deref())
            .map_err(|e| DogError::InvalidArgument(e.to_string()))?;

        if page_number == 0 {
            return Err(DogError::InvalidArgument("page number must be at least 1".into()));
        }
        if page_size == 0 {
            return Err(DogError::InvalidArgument("page size must be at least 1".into()));
        }

        tracing::debug!(
            sort_by = %order.key,
            direction = %order.direction,
            page_number,
            page_size,
            "Listing dogs"
        );

        let mut dogs = self
            .dog_repo
            .list_all()
            .await
            .map_err(DogError::from_store)?;

        let total_count = self
            .dog_repo
            .count()
            .await
            .map_err(DogError::from_store)?;

        order.sort(&mut dogs);

        Ok(DogPage {
            dogs: page_slice(dogs, page_number, page_size),
            total_count,
        })
    }

    async fn create_dog(&self, input: Option<CreateDogDto>) -> Result<Dog, DogError> {
        let input = input.ok_or(DogError::NullInput)?;
        let dog = Self::validate(input)?;

        let existing = self
            .dog_repo
            .find_by_name(&dog.name)
            .await
            .map_err(DogError::from_store)?;

        if existing.is_some() {
            tracing::warn!(name = %dog.name, "Rejected duplicate dog name");
            return Err(DogError::Conflict("duplicate name".into()));
        }

        // A concurrent create can still win between the lookup and the
        // insert; the store reports that as a conflict too.
        let created = self
            .dog_repo
            .insert(&dog)
            .await
            .map_err(DogError::from_store)?;

        tracing::debug!(name = %created.name, "Dog created");
        metrics::record_dog_created();

        Ok(created)
    }
}
