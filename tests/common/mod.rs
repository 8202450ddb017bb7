//! Shared utilities for integration testing.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use microservice::config::AppConfig;
use microservice::http::HttpServer;
use microservice::observability::metrics::MetricsRegistry;

/// A running service instance bound to an ephemeral port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub metrics: Arc<MetricsRegistry>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the real server on an ephemeral port and hand back its address and
/// the registry it records into. The listener is bound before the accept
/// loop is spawned, so requests can be sent immediately.
pub async fn spawn_app() -> TestApp {
    let config = AppConfig::default();
    let metrics = Arc::new(MetricsRegistry::new());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, metrics.clone());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    TestApp { addr, metrics }
}

/// Value of the first sample line for `name` whose labels include every
/// `k="v"` pair in `labels`.
pub fn sample(render: &str, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
    render.lines().find_map(|line| {
        let rest = line.strip_prefix(name)?;
        if !rest.starts_with('{') {
            return None;
        }
        let wanted = labels
            .iter()
            .all(|(k, v)| rest.contains(&format!("{}=\"{}\"", k, v)));
        if wanted {
            line.rsplit(' ').next()?.parse().ok()
        } else {
            None
        }
    })
}
