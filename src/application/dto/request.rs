//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::CreateDogDto;

/// Query parameters for `GET /dogs`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListDogsQueryParams {
    /// Sort attribute (`name`, `color`, `tailLength`, `weight`)
    #[serde(alias = "sortBy")]
    pub attribute: Option<String>,

    /// Sort direction (`asc`, `desc`)
    #[serde(alias = "direction")]
    pub order: Option<String>,

    #[serde(rename = "pageNumber", alias = "page_number")]
    #[validate(range(min = 1, message = "pageNumber must be at least 1"))]
    pub page_number: Option<u32>,

    #[serde(rename = "pageSize", alias = "page_size")]
    #[validate(range(min = 1, message = "pageSize must be at least 1"))]
    pub page_size: Option<u32>,
}

/// Create dog request
///
/// Every field may be omitted; the service decides what is acceptable.
#[derive(Debug, Default, Deserialize)]
pub struct CreateDogRequest {
    pub name: Option<String>,

    pub color: Option<String>,

    #[serde(default, alias = "tailLength")]
    pub tail_length: i32,

    #[serde(default)]
    pub weight: i32,
}

impl From<CreateDogRequest> for CreateDogDto {
    fn from(req: CreateDogRequest) -> Self {
        Self {
            name: req.name,
            color: req.color.unwrap_or_default(),
            tail_length: req.tail_length,
            weight: req.weight,
        }
    }
}
