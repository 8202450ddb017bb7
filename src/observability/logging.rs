//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem (env-filter + JSON layer)
//! - Turn every `tracing` event into one line-delimited JSON record
//! - Stamp records with the service name and host identifier
//!
//! # Design Decisions
//! - JSON on stdout; the log collector owns shipping and retention
//! - One `write_all` per record so concurrent lines never interleave
//! - Emission never fails: a broken record degrades to `{level, msg}`

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ServiceConfig;

/// One structured log event, serialized as a single JSON line.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub level: String,
    pub msg: String,
    pub timestamp: String,
    pub service: String,
    pub hostname: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// Current UTC time as an ISO-8601 string with microsecond precision.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Install the global subscriber: env-filter plus the JSON stdout layer.
pub fn init(service: &ServiceConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(JsonLogLayer::new(
            service.name.clone(),
            service.hostname.clone(),
        ))
        .init();
}

/// `tracing_subscriber` layer that emits every event as a [`LogRecord`].
pub struct JsonLogLayer<W = fn() -> std::io::Stdout> {
    service: String,
    hostname: String,
    make_writer: W,
}

impl JsonLogLayer {
    pub fn new(service: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            hostname: hostname.into(),
            make_writer: std::io::stdout,
        }
    }
}

impl<W> JsonLogLayer<W> {
    /// Redirect output, e.g. to a buffer in tests.
    pub fn with_writer<W2>(self, make_writer: W2) -> JsonLogLayer<W2>
    where
        W2: for<'w> MakeWriter<'w> + 'static,
    {
        JsonLogLayer {
            service: self.service,
            hostname: self.hostname,
            make_writer,
        }
    }
}

impl<S, W> Layer<S> for JsonLogLayer<W>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        let mut message: Option<String> = None;

        let mut visitor = FieldVisitor {
            fields: &mut fields,
            message: &mut message,
        };
        event.record(&mut visitor);

        let record = LogRecord {
            level: event.metadata().level().to_string(),
            msg: message.unwrap_or_default(),
            timestamp: utc_timestamp(),
            service: self.service.clone(),
            hostname: self.hostname.clone(),
            fields,
        };

        let mut line = serde_json::to_vec(&record).unwrap_or_else(|_| minimal_line(&record));
        line.push(b'\n');
        let _ = self.make_writer.make_writer().write_all(&line);
    }
}

/// Fallback when a record does not serialize: keep level and message.
fn minimal_line(record: &LogRecord) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "level": record.level,
        "msg": record.msg,
    }))
    .unwrap_or_default()
}

struct FieldVisitor<'a> {
    fields: &'a mut BTreeMap<String, serde_json::Value>,
    message: &'a mut Option<String>,
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.message = Some(format!("{:?}", value));
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(format!("{:?}", value)),
            );
        }
    }
}
