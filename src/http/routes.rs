//! Collaborator endpoints: probes, service info, metrics scrape.
//!
//! These handlers carry no logic of their own; the instrumentation
//! middleware wraps all of them, the metrics endpoint included.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::http::server::AppState;
use crate::observability::logging::utc_timestamp;

/// Probe response for `/health` and `/ready`.
#[derive(Serialize)]
pub struct ProbeStatus {
    pub status: &'static str,
    pub timestamp: String,
}

/// Service information returned by the root endpoint.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub description: String,
    pub version: &'static str,
    pub timestamp: String,
    pub hostname: String,
}

/// Health check endpoint for the liveness probe.
pub async fn health() -> Json<ProbeStatus> {
    Json(ProbeStatus {
        status: "healthy",
        timestamp: utc_timestamp(),
    })
}

/// Readiness check endpoint for the readiness probe.
pub async fn ready() -> Json<ProbeStatus> {
    // Readiness checks (database, cache, ...) slot in here.
    Json(ProbeStatus {
        status: "ready",
        timestamp: utc_timestamp(),
    })
}

/// Root endpoint with service information.
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    tracing::info!("Root endpoint accessed");

    let service = &state.config.service;
    Json(ServiceInfo {
        service: service.name.clone(),
        description: service.description.clone(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: utc_timestamp(),
        hostname: service.hostname.clone(),
    })
}

/// Metrics endpoint in Prometheus text exposition format.
pub async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
