//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! Every field has a default so a bare environment produces a working config.

/// Root configuration for the service.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Service identity (name, description, host identifier).
    pub service: ServiceConfig,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitConfig,
}

/// Service identity, surfaced in the root endpoint and every log record.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service name (`APP_NAME`).
    pub name: String,

    /// Human-readable description (`APP_DESCRIPTION`).
    pub description: String,

    /// Host identifier, resolved once at process start.
    pub hostname: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "microservice".to_string(),
            description: "Rust microservice".to_string(),
            hostname: "unknown".to_string(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration for the transport layer.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request size limits.
#[derive(Debug, Clone)]
pub struct LimitConfig {
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
        }
    }
}
