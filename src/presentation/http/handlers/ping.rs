//! Ping Handler

/// Version banner returned by `GET /ping`
pub const VERSION_BANNER: &str = concat!("Dogshouseservice.Version", env!("CARGO_PKG_VERSION"));

/// Liveness text with the service version
pub async fn ping() -> &'static str {
    VERSION_BANNER
}
