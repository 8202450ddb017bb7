//! Service entry point.
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                 MICROSERVICE                  │
//!                  │                                               │
//!   Client ────────┼─▶ instrumentation ─▶ routes (/ /health        │
//!                  │    middleware         /ready /metrics)        │
//!                  │         │                  │                  │
//!                  │         │           fallback responder        │
//!                  │         ▼                  │                  │
//!   stdout ◀───────┼── log emitter ◀────────────┘                  │
//!   Prometheus ◀───┼── metric registry                             │
//!                  └──────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;

use microservice::config::AppConfig;
use microservice::http::HttpServer;
use microservice::observability::{logging, metrics::MetricsRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration and host identity are resolved exactly once, up front.
    let config = AppConfig::from_env();

    logging::init(&config.service);

    tracing::info!(
        service = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        "microservice starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let metrics = Arc::new(MetricsRegistry::new());
    let server = HttpServer::new(config, metrics);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
