//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (APP_NAME, APP_DESCRIPTION, PORT, ...)
//!     → loader.rs (read & parse, defaults for anything unset)
//!     → AppConfig (immutable)
//!     → shared via Arc to the HTTP server and handlers
//! ```
//!
//! # Design Decisions
//! - Config is read exactly once at startup; changes require a restart
//! - All fields have defaults so an empty environment still boots
//! - The host identifier is resolved here, once, alongside the config

pub mod loader;
pub mod schema;

pub use schema::AppConfig;
pub use schema::LimitConfig;
pub use schema::ListenerConfig;
pub use schema::ServiceConfig;
pub use schema::TimeoutConfig;
