//! Rate Limiting Middleware
//!
//! In-process sliding window rate limiting keyed by client identifier.

use std::collections::VecDeque;
use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::config::RateLimitSettings;
use crate::shared::error::ErrorResponse;
use crate::startup::AppState;

// ============================================================================
// Rate Limit Configuration
// ============================================================================

/// Configuration for rate limiting behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Requests allowed per window, 0 disables limiting
    pub requests_per_window: u32,
    /// Window duration in milliseconds
    pub window_ms: i64,
    /// Optional burst allowance above base limit
    pub burst_allowance: u32,
}

impl RateLimitConfig {
    fn capacity(&self) -> u32 {
        self.requests_per_window.saturating_add(self.burst_allowance)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: 10,
            window_ms: 1000,
            burst_allowance: 0,
        }
    }
}

// ============================================================================
// Rate Limit Response
// ============================================================================

/// Information about rate limit status returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window
    pub limit: u32,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets
    pub reset_at: i64,
    /// Seconds until the rate limit resets
    pub retry_after: u64,
}

/// Rate limit exceeded error response.
#[derive(Debug, Serialize)]
struct RateLimitExceededResponse {
    #[serde(flatten)]
    error: ErrorResponse,
    rate_limit: RateLimitInfo,
}

// ============================================================================
// Rate Limiter Implementation
// ============================================================================

/// Sliding window rate limiter.
///
/// Each identifier owns a queue of request timestamps. On every check the
/// entries older than the window are dropped; the request is admitted when
/// fewer than `requests_per_window + burst_allowance` remain.
pub struct RateLimiter {
    windows: DashMap<String, VecDeque<i64>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    /// Create a new rate limiter instance.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            windows: DashMap::new(),
            config,
        }
    }

    /// Create from application settings (one second window).
    pub fn from_settings(settings: &RateLimitSettings) -> Self {
        Self::new(RateLimitConfig {
            requests_per_window: settings.requests_per_second,
            window_ms: 1000,
            burst_allowance: settings.burst_size,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.requests_per_window > 0
    }

    /// Check if a request should be allowed.
    ///
    /// Returns `Ok(RateLimitInfo)` if allowed, `Err(RateLimitInfo)` if rate limited.
    pub fn check(&self, identifier: &str) -> Result<RateLimitInfo, RateLimitInfo> {
        self.check_at(identifier, chrono::Utc::now().timestamp_millis())
    }

    fn check_at(&self, identifier: &str, now_ms: i64) -> Result<RateLimitInfo, RateLimitInfo> {
        let max_requests = self.config.capacity();
        let window_start = now_ms - self.config.window_ms;

        let mut window = self.windows.entry(identifier.to_string()).or_default();
        while window.front().is_some_and(|&ts| ts <= window_start) {
            window.pop_front();
        }

        let oldest = window.front().copied().unwrap_or(now_ms);
        let reset_at = (oldest + self.config.window_ms) / 1000;

        if (window.len() as u32) < max_requests {
            window.push_back(now_ms);
            Ok(RateLimitInfo {
                limit: max_requests,
                remaining: max_requests - window.len() as u32,
                reset_at,
                retry_after: 0,
            })
        } else {
            let retry_ms = (oldest + self.config.window_ms - now_ms).max(0);
            Err(RateLimitInfo {
                limit: max_requests,
                remaining: 0,
                reset_at,
                retry_after: ((retry_ms as f64) / 1000.0).ceil() as u64,
            })
        }
    }

    /// Drop identifiers with no requests inside the current window.
    ///
    /// Returns the number of identifiers removed.
    pub fn purge_idle(&self) -> usize {
        self.purge_idle_at(chrono::Utc::now().timestamp_millis())
    }

    fn purge_idle_at(&self, now_ms: i64) -> usize {
        let window_start = now_ms - self.config.window_ms;
        let before = self.windows.len();
        self.windows
            .retain(|_, window| window.back().is_some_and(|&ts| ts > window_start));
        before.saturating_sub(self.windows.len())
    }
}

// ============================================================================
// Identifier Extraction
// ============================================================================

/// Extract the rate limit identifier from a request.
///
/// Priority:
/// 1. X-Forwarded-For header (for reverse proxy setups)
/// 2. X-Real-IP header
/// 3. Client IP address (fallback)
fn extract_identifier(request: &Request, client_ip: Option<IpAddr>) -> String {
    // First IP in the chain is the original client
    if let Some(forwarded_for) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first_ip) = forwarded_for.split(',').next() {
            let ip = first_ip.trim();
            if ip.parse::<IpAddr>().is_ok() {
                return format!("ip:{}", ip);
            }
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
    {
        if real_ip.parse::<IpAddr>().is_ok() {
            return format!("ip:{}", real_ip);
        }
    }

    match client_ip {
        Some(ip) => format!("ip:{}", ip),
        None => "ip:unknown".to_string(),
    }
}

// ============================================================================
// Middleware Functions
// ============================================================================

/// Rate limiting middleware for the catalog API.
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !state.rate_limiter.is_enabled() {
        return next.run(request).await;
    }

    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip());
    let identifier = extract_identifier(&request, client_ip);

    match state.rate_limiter.check(&identifier) {
        Ok(info) => {
            let mut response = next.run(request).await;
            add_rate_limit_headers(response.headers_mut(), &info);
            response
        }
        Err(info) => {
            tracing::warn!(identifier = %identifier, "Rate limit exceeded");
            create_rate_limit_response(info)
        }
    }
}

/// Add rate limit headers to a response.
fn add_rate_limit_headers(headers: &mut header::HeaderMap, info: &RateLimitInfo) {
    headers.insert("x-ratelimit-limit", header::HeaderValue::from(info.limit));
    headers.insert("x-ratelimit-remaining", header::HeaderValue::from(info.remaining));
    headers.insert("x-ratelimit-reset", header::HeaderValue::from(info.reset_at));
}

/// Create a 429 Too Many Requests response.
fn create_rate_limit_response(info: RateLimitInfo) -> Response {
    let retry_after = info.retry_after;
    let headers_info = info.clone();
    let body = RateLimitExceededResponse {
        error: ErrorResponse {
            code: 10006,
            message: "Too many requests. Please slow down.".to_string(),
        },
        rate_limit: info,
    };

    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::RETRY_AFTER, header::HeaderValue::from(retry_after));
    add_rate_limit_headers(response.headers_mut(), &headers_info);

    response
}

// ============================================================================
// Tests
// ============================================================================
