//! Fallback error handling for route handlers.
//!
//! Any failure escaping a route handler is converted here into a fixed-shape
//! JSON response. The instrumentation middleware then accounts for the 500
//! like any other response, so a failed request is still logged and counted
//! exactly once.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Failure escaping a route handler.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// Any otherwise-unhandled failure raised while producing a response.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Fixed-shape body returned for any internal failure.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "Internal server error",
            }),
        )
            .into_response();
        // recover_errors reads this back to emit the error-level log line
        // with the request path attached.
        response.extensions_mut().insert(self);
        response
    }
}

/// Adapter for `CatchPanicLayer`: a panicking handler produces the same
/// fixed 500 response as one that returned an error.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::internal(detail).into_response()
}
