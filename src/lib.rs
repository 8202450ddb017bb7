//! Instrumented HTTP microservice scaffold.
//!
//! Every inbound request is wrapped by the instrumentation pipeline: one
//! structured JSON log line, one counter increment, and one latency
//! histogram observation per request, however the handler ends. Liveness
//! and readiness probes and a Prometheus scrape endpoint come built in.

pub mod config;
pub mod http;
pub mod observability;

pub use config::AppConfig;
pub use http::{AppError, AppState, HttpServer};
pub use observability::metrics::MetricsRegistry;
