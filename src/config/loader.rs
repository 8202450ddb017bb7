//! Configuration loading from the process environment.

use std::env;
use std::str::FromStr;

use crate::config::schema::{AppConfig, LimitConfig, ListenerConfig, ServiceConfig, TimeoutConfig};

impl AppConfig {
    /// Build the configuration from environment variables, applying defaults
    /// for anything unset or unparseable. Read once at startup.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig {
                name: env_or("APP_NAME", "microservice"),
                description: env_or("APP_DESCRIPTION", "Rust microservice"),
                hostname: env_or("HOSTNAME", "unknown"),
            },
            listener: ListenerConfig {
                bind_address: bind_address_from_env(),
            },
            timeouts: TimeoutConfig {
                request_secs: env_parse("REQUEST_TIMEOUT_SECS", 30),
            },
            limits: LimitConfig {
                max_body_bytes: env_parse("MAX_BODY_BYTES", 1024 * 1024),
            },
        }
    }
}

/// `BIND_ADDRESS` wins when set; otherwise the address is assembled from
/// `PORT`, the convention the container runtime uses.
fn bind_address_from_env() -> String {
    match env::var("BIND_ADDRESS") {
        Ok(addr) if !addr.is_empty() => addr,
        _ => format!("0.0.0.0:{}", env_or("PORT", "8080")),
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_parse<T: FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-wide, so all loader assertions live in
    // one test to keep them from interleaving.
    #[test]
    fn from_env_applies_defaults_and_overrides() {
        for key in [
            "APP_NAME",
            "APP_DESCRIPTION",
            "BIND_ADDRESS",
            "PORT",
            "REQUEST_TIMEOUT_SECS",
            "MAX_BODY_BYTES",
        ] {
            env::remove_var(key);
        }

        let config = AppConfig::from_env();
        assert_eq!(config.service.name, "microservice");
        assert_eq!(config.service.description, "Rust microservice");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.limits.max_body_bytes, 1024 * 1024);

        env::set_var("APP_NAME", "orders");
        env::set_var("PORT", "9090");
        env::set_var("REQUEST_TIMEOUT_SECS", "5");
        let config = AppConfig::from_env();
        assert_eq!(config.service.name, "orders");
        assert_eq!(config.listener.bind_address, "0.0.0.0:9090");
        assert_eq!(config.timeouts.request_secs, 5);

        // A full bind address takes precedence over the port shorthand.
        env::set_var("BIND_ADDRESS", "127.0.0.1:3000");
        let config = AppConfig::from_env();
        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");

        // Garbage numerics fall back to the default rather than failing boot.
        env::set_var("REQUEST_TIMEOUT_SECS", "not-a-number");
        let config = AppConfig::from_env();
        assert_eq!(config.timeouts.request_secs, 30);

        for key in ["APP_NAME", "BIND_ADDRESS", "PORT", "REQUEST_TIMEOUT_SECS"] {
            env::remove_var(key);
        }
    }
}
