//! Vigia - dashboard service for remote health monitoring of elderly patients.
//!
//! # API Endpoints
//!
//! - `GET /api` - confirmation that the service is up
//! - `GET /api/patients` - list registered patients
//! - `GET /api/health-data[/{id}]` - recent samples for a patient
//! - `GET /api/latest-data[/{id}]` - the most recent sample
//! - `GET /api/risk-stats[/{id}]` - risk distribution
//! - `GET /api/analyses[/{id}]` - recent emotional analyses
//! - `GET /api/recommendations[/{id}]` - recent recommendations
//! - `GET /api/agents-status` - background agent status
//! - `GET /api/overview[/{id}]` - aggregated dashboard view
//! - `GET /health` - health check

use std::env;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use vigia::api::{AppState, router};
use vigia::upstream::HealthApiClient;

/// Default port if not specified via environment variable.
const DEFAULT_PORT: u16 = 8090;

/// Default upstream base URL if not specified via environment variable.
const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8080/api";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with environment filter
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("vigia=info".parse()?))
        .init();

    // Load configuration from environment
    let port: u16 = env::var("VIGIA_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let upstream_url =
        env::var("VIGIA_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

    info!(port, upstream = %upstream_url, "Starting Vigia server");

    let state = AppState {
        client: HealthApiClient::new(&upstream_url),
    };

    let app = router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "Vigia is listening");

    axum::serve(listener, app).await?;

    Ok(())
}
