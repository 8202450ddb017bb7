//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! request pipeline produces:
//!     → logging.rs (structured JSON log lines)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Consumers:
//!     → log aggregation (stdout)
//!     → GET /metrics (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Metrics are cheap (atomic increments inside the recorder)
//! - The registry is an explicit component, constructed once and injected

pub mod logging;
pub mod metrics;
