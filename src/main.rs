//! Compliance Dashboard Backend
//!
//! Caches attestation results from the Attestation Collector and serves them
//! to the static dashboard frontend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  COMPLIANCE DASHBOARD                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐        ┌───────────┐     ┌────────────────┐ │
//! │  │  Poller   │──GET──▶│ Collector │     │  API + Static  │ │
//! │  │  (30s)    │        │  Client   │     │  (Axum)        │ │
//! │  └─────┬─────┘        └───────────┘     └───────┬────────┘ │
//! │        │ replace_all                      read  │          │
//! │        ▼                                        ▼          │
//! │                ┌──────────────────────┐                    │
//! │                │  StatusCache (RwLock)│                    │
//! │                └──────────────────────┘                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cache;
mod collector;
mod config;
mod demo;
mod error;
mod handlers;
mod middleware;
mod models;


use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower_http::{
    services::ServeDir,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;
use std::sync::Arc;

use cache::StatusCache;
use collector::{CollectorClient, Poller};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "attestation_dashboard=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Dashboard backend stopped: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Compliance Dashboard Backend starting...");
    tracing::info!("Attestation Collector: {}", config.collector_url);

    // Build application state
    let state = AppState {
        cache: Arc::new(StatusCache::new()),
        config: config.clone(),
    };

    // Start background polling
    let client = CollectorClient::new(&config.collector_url, config.request_timeout)?;
    Poller::new(client, state.cache.clone(), config.poll_interval).spawn();

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", addr, e))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<StatusCache>,
    pub config: config::Config,
}

/// Create the main router with all routes.
/// API routes answer every method CORS advertises (`GET`, `POST`).
fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/healthz", get(handlers::health::check).post(handlers::health::check))

        // Dashboard API
        .route("/api/status", get(handlers::dashboard::status).post(handlers::dashboard::status))
        .route("/api/workloads", get(handlers::dashboard::workloads).post(handlers::dashboard::workloads))
        .route("/api/workload", get(handlers::dashboard::detail_missing_name).post(handlers::dashboard::detail_missing_name))
        .route("/api/workload/", get(handlers::dashboard::detail_missing_name).post(handlers::dashboard::detail_missing_name))
        .route("/api/workload/*name", get(handlers::dashboard::detail).post(handlers::dashboard::detail))

        // Frontend bundle
        .fallback_service(static_files)

        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(middleware::cors::permissive_cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
