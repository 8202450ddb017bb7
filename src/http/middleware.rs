//! Request instrumentation middleware.
//!
//! # Responsibilities
//! - Wrap every handler invocation, whatever its outcome
//! - Measure elapsed time from arrival to finalized response
//! - Emit exactly one "Request completed" log line per request
//! - Apply exactly one counter increment and one histogram observation,
//!   with label values matching the log line

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::http::error::AppError;
use crate::http::server::AppState;

/// Instrumentation pipeline. Accounting happens only after the downstream
/// handler (or its fallback) has produced a final response, and happens on
/// every path through the router.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    tracing::info!(
        method = %method,
        path = %path,
        status = status,
        duration_ms = round_ms(elapsed),
        user_agent = %user_agent,
        "Request completed"
    );
    state.metrics.record_request(&method, &path, status, elapsed);

    response
}

/// Last-resort failure interceptor, layered between the instrumentation
/// middleware and the routes. A failure converted by the fallback responder
/// is logged here with the request path, then the 500 continues outward for
/// normal accounting.
pub async fn recover_errors(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if let Some(AppError::Internal(err)) = response.extensions().get::<AppError>() {
        tracing::error!(error = %err, path = %path, "Unhandled error: {err}");
    }
    response
}

/// Elapsed time in milliseconds, rounded to two decimal places.
fn round_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}
