//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → middleware.rs (start timer, capture method/path/user-agent)
//!     → routes.rs handler (or error.rs fallback on failure)
//!     → middleware.rs (log line + counter + histogram, exactly once)
//!     → response to client
//! ```

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use server::{AppState, HttpServer};
