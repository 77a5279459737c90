//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{DogService, DogServiceImpl};
use crate::config::{Settings, StoreBackend};
use crate::domain::DogRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryDogRepository, PgDogRepository};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::RateLimiter;

/// How often idle rate limit windows are swept.
const RATE_LIMIT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dog_service: Arc<dyn DogService>,
    pub dog_repo: Arc<dyn DogRepository>,
    pub rate_limiter: Arc<RateLimiter>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build state around a store, wiring the default service.
    pub fn new(settings: Settings, dog_repo: Arc<dyn DogRepository>) -> Self {
        let dog_service: Arc<dyn DogService> =
            Arc::new(DogServiceImpl::new(Arc::clone(&dog_repo)));
        Self::with_service(settings, dog_repo, dog_service)
    }

    /// Build state with an explicit service implementation.
    pub fn with_service(
        settings: Settings,
        dog_repo: Arc<dyn DogRepository>,
        dog_service: Arc<dyn DogService>,
    ) -> Self {
        let rate_limiter = Arc::new(RateLimiter::from_settings(&settings.rate_limit));
        Self {
            dog_service,
            dog_repo,
            rate_limiter,
            settings: Arc::new(settings),
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let dog_repo = create_repository(&settings).await?;

        let state = AppState::new(settings.clone(), dog_repo);
        spawn_rate_limit_sweeper(Arc::clone(&state.rate_limiter));
        handlers::health::init_server_start();

        let router = routes::create_router(state);

        // Bind to address
        let addr = settings
            .server
            .socket_addr()
            .with_context(|| format!("invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Select and prepare the record store.
async fn create_repository(settings: &Settings) -> Result<Arc<dyn DogRepository>> {
    match settings.database.backend {
        StoreBackend::Postgres => {
            let pool = database::create_pool(&settings.database).await?;
            tracing::info!("Database connection pool created");

            if settings.database.run_migrations {
                database::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            Ok(Arc::new(PgDogRepository::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on restart");
            Ok(Arc::new(InMemoryDogRepository::new()))
        }
    }
}

fn spawn_rate_limit_sweeper(limiter: Arc<RateLimiter>) {
    if !limiter.is_enabled() {
        return;
    }
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = limiter.purge_idle();
            if removed > 0 {
                tracing::debug!(removed, "Purged idle rate limit windows");
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
