//! Presentation Layer
//!
//! HTTP routes, handlers and middleware for the dog catalog.

pub mod http;
pub mod middleware;
