//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, endpoint, status
//! - `http_request_duration_seconds` (histogram): latency distribution by
//!   method and endpoint, buckets {0.1, 0.5, 1, 2, 5} seconds
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations inside the recorder)
//! - The recorder is owned by the registry and driven through the
//!   [`Recorder`] trait instead of being installed as the process-global
//!   default, so the registry stays an explicit, injectable component and
//!   any number of instances can coexist (tests create one per case)
//! - Label cardinality is unbounded: the raw request path is the
//!   `endpoint` label and cells are never evicted

use std::time::Duration;

use metrics::{Key, KeyName, Label, Level, Metadata, Recorder, SharedString};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

/// Series name for the request counter.
pub const REQUEST_COUNT: &str = "http_requests_total";

/// Series name for the request latency histogram.
pub const REQUEST_DURATION: &str = "http_request_duration_seconds";

/// Fixed histogram bucket boundaries in seconds.
const DURATION_BUCKETS: &[f64] = &[0.1, 0.5, 1.0, 2.0, 5.0];

static METADATA: Metadata<'static> = Metadata::new(module_path!(), Level::INFO, Some(module_path!()));

/// Process-wide registry for the request counter and latency histogram.
///
/// Constructed once at startup and shared by reference into the
/// instrumentation middleware; `render` is safe to call concurrently with
/// the recording operations.
pub struct MetricsRegistry {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(Matcher::Full(REQUEST_DURATION.to_string()), DURATION_BUCKETS)
            .expect("duration buckets are non-empty")
            .build_recorder();

        recorder.describe_counter(
            KeyName::from_const_str(REQUEST_COUNT),
            None,
            SharedString::const_str("Total HTTP requests"),
        );
        recorder.describe_histogram(
            KeyName::from_const_str(REQUEST_DURATION),
            None,
            SharedString::const_str("HTTP request duration in seconds"),
        );

        let handle = recorder.handle();
        Self { recorder, handle }
    }

    /// Increment the counter cell for this label tuple, creating it on
    /// first use.
    pub fn increment_request_count(&self, method: &str, path: &str, status: u16) {
        let key = Key::from_parts(
            REQUEST_COUNT,
            vec![
                Label::new("method", method.to_string()),
                Label::new("endpoint", path.to_string()),
                Label::new("status", status.to_string()),
            ],
        );
        self.recorder.register_counter(&key, &METADATA).increment(1);
    }

    /// Record one observation into the histogram cell for this label tuple,
    /// creating it on first use.
    pub fn observe_request_duration(&self, method: &str, path: &str, elapsed: Duration) {
        let key = Key::from_parts(
            REQUEST_DURATION,
            vec![
                Label::new("method", method.to_string()),
                Label::new("endpoint", path.to_string()),
            ],
        );
        self.recorder
            .register_histogram(&key, &METADATA)
            .record(elapsed.as_secs_f64());
    }

    /// One completed request: exactly one counter increment and one
    /// histogram observation, with matching label values.
    pub fn record_request(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        self.increment_request_count(method, path, status);
        self.observe_request_duration(method, path, elapsed);
    }

    /// Render all cells in Prometheus text exposition format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
