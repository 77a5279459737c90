//! HTTP Transport
//!
//! Routing and request handlers.

pub mod handlers;
pub mod routes;
