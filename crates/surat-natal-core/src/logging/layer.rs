//! `tracing` layer that mirrors events into the daily JSONL file, and the
//! builder that installs it next to console output.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::LogEntry;
use super::writer::DailyLogFile;

/// Default filter when neither `--log-filter` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "surat_natal=info,surat_natal_core=info";

/// Writes every event it sees as a [`LogEntry`].
pub struct JsonlLayer {
    file: Arc<DailyLogFile>,
}

impl JsonlLayer {
    pub fn new(logs_dir: impl AsRef<std::path::Path>, instance: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self {
            file: Arc::new(DailyLogFile::open(logs_dir, instance)?),
        })
    }

    pub fn log_path(&self) -> &std::path::Path {
        self.file.path()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let meta = event.metadata();

        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        let mut entry = LogEntry::now(
            meta.level().as_str().to_lowercase(),
            self.file.instance(),
            meta.target(),
            collector.message.unwrap_or_default(),
        );
        if !collector.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(collector.fields));
        }
        if let Some(scope) = ctx.event_scope(event) {
            let names: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !names.is_empty() {
                entry = entry.with_span(names.join(" > "));
            }
        }

        // A failed log write must not take the app down
        let _ = self.file.append(&entry);
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldCollector {
    fn put(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut text = String::new();
        let _ = write!(text, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(text);
        } else {
            self.put(field, serde_json::Value::String(text));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.put(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.put(field, serde_json::Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, serde_json::Value::String(value.to_string()));
    }
}

/// Installs the global subscriber: env filter, console, JSONL file.
pub struct LoggingBuilder {
    logs_dir: PathBuf,
    instance: String,
    console: bool,
    filter: Option<String>,
}

impl LoggingBuilder {
    pub fn new(logs_dir: impl Into<PathBuf>, instance: impl Into<String>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            instance: instance.into(),
            console: true,
            filter: None,
        }
    }

    /// Only write the JSONL file.
    pub fn no_console(mut self) -> Self {
        self.console = false;
        self
    }

    /// Filter directive; takes precedence over `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn env_filter(&self) -> EnvFilter {
        match &self.filter {
            Some(directive) => EnvFilter::new(directive),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        }
    }

    /// Install the subscriber. Returns the JSONL path, or `None` when the
    /// file could not be opened and only console logging is active.
    pub fn init(self) -> Result<Option<PathBuf>, TryInitError> {
        let (jsonl, open_error) = match JsonlLayer::new(&self.logs_dir, &self.instance) {
            Ok(layer) => (Some(layer), None),
            Err(e) => (None, Some(e)),
        };
        let log_path = jsonl.as_ref().map(|layer| layer.log_path().to_path_buf());
        // Console is forced on when there is no log file
        let console = (self.console || jsonl.is_none()).then(tracing_subscriber::fmt::layer);

        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(jsonl)
            .with(console)
            .try_init()?;

        if let Some(e) = open_error {
            tracing::warn!(
                logs_dir = %self.logs_dir.display(),
                error = %e,
                "Could not open log file, logging to console only"
            );
        }
        Ok(log_path)
    }
}
