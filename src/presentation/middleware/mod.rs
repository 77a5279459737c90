//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod rate_limit;

pub use cors::create_cors_layer;
pub use logging::{create_trace_layer, track_metrics};
pub use rate_limit::{rate_limit, RateLimitConfig, RateLimitInfo, RateLimiter};
