//! Belated flushing of suppressed log records.
//!
//! Records more verbose than the configured threshold are not written;
//! instead the most recent of them are retained in a bounded in-memory
//! buffer. When a record at or above the trigger level arrives, the
//! retained records are flushed ahead of it, marked `belated=true`, so
//! the context leading up to a failure is preserved without paying for
//! verbose output in the steady state.

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::config::BelatedConfig;

/// Destination for rendered belated records.
pub trait LogSink: Send + Sync + 'static {
    /// Write one rendered record.
    fn write_line(&self, line: &str);
}

/// Sink that writes to stderr.
#[derive(Debug, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Sink that collects lines in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create a shareable memory sink.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Layer that retains suppressed records and flushes them on demand.
pub struct BelatedLayer {
    capacity: usize,
    threshold: Level,
    trigger: Level,
    /// Pre-rendered ` key=value` suffix from the configured extras.
    extra: String,
    sink: Arc<dyn LogSink>,
    buffer: Mutex<VecDeque<String>>,
}

impl BelatedLayer {
    /// Build a layer from config, extras, and a sink.
    pub fn new(
        config: &BelatedConfig,
        extra: &BTreeMap<String, String>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        let mut suffix = String::new();
        for (key, value) in extra {
            let _ = write!(suffix, " {key}={value}");
        }
        Self {
            capacity: config.capacity,
            threshold: config.threshold_level(),
            trigger: config.trigger_level(),
            extra: suffix,
            sink,
            buffer: Mutex::new(VecDeque::new()),
        }
    }

    /// Number of records currently retained.
    pub fn buffered(&self) -> usize {
        self.buffer.lock().unwrap().len()
    }

    fn render(&self, event: &Event<'_>) -> String {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        let mut line = format!(
            "{} {:>5} {}: {}",
            Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            meta.level(),
            meta.target(),
            visitor.message,
        );
        line.push_str(&visitor.fields);
        line.push_str(&self.extra);
        line
    }

    fn flush(&self) {
        let retained: Vec<String> = self.buffer.lock().unwrap().drain(..).collect();
        for line in retained {
            self.sink.write_line(&format!("{line} belated=true"));
        }
    }
}

impl<S: Subscriber> Layer<S> for BelatedLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // tracing orders levels by verbosity: ERROR is the minimum.
        let level = *event.metadata().level();
        if level <= self.trigger {
            self.flush();
        } else if level > self.threshold {
            let line = self.render(event);
            let mut buffer = self.buffer.lock().unwrap();
            if buffer.len() >= self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
        // Records between threshold and trigger pass through untouched;
        // the fmt layer already writes them.
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: String,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::prelude::*;

    fn layer_with_sink(capacity: usize) -> (BelatedLayer, Arc<MemorySink>) {
        let sink = MemorySink::new();
        let config = BelatedConfig {
            capacity,
            ..Default::default()
        };
        let layer = BelatedLayer::new(&config, &BTreeMap::new(), sink.clone());
        (layer, sink)
    }

    fn with_layer(layer: BelatedLayer, f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn suppressed_records_are_not_written() {
        let (layer, sink) = layer_with_sink(10);
        with_layer(layer, || {
            tracing::debug!("quiet bookkeeping");
            tracing::trace!("even quieter");
        });
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn trigger_flushes_retained_records_marked_belated() {
        let (layer, sink) = layer_with_sink(10);
        with_layer(layer, || {
            tracing::debug!("step one");
            tracing::debug!("step two");
            tracing::error!("it broke");
        });

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("step one"));
        assert!(lines[1].contains("step two"));
        assert!(lines.iter().all(|l| l.ends_with("belated=true")));
    }

    #[test]
    fn buffer_is_cleared_after_flush() {
        let (layer, sink) = layer_with_sink(10);
        with_layer(layer, || {
            tracing::debug!("before first failure");
            tracing::error!("first failure");
            tracing::error!("second failure");
        });
        // Only the one retained record is flushed, once.
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let (layer, sink) = layer_with_sink(2);
        with_layer(layer, || {
            tracing::debug!("one");
            tracing::debug!("two");
            tracing::debug!("three");
            tracing::error!("boom");
        });

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("two"));
        assert!(lines[1].contains("three"));
    }

    #[test]
    fn visible_records_are_not_buffered() {
        let (layer, sink) = layer_with_sink(10);
        with_layer(layer, || {
            tracing::info!("routine progress");
            tracing::error!("boom");
        });
        // The info record passed through to the fmt layer; nothing to flush.
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn extras_are_appended_to_belated_records() {
        let sink = MemorySink::new();
        let mut extra = BTreeMap::new();
        extra.insert("hostname".to_string(), "node-1".to_string());
        let layer = BelatedLayer::new(&BelatedConfig::default(), &extra, sink.clone());

        with_layer(layer, || {
            tracing::debug!(job = "project.Job", "dequeued");
            tracing::error!("boom");
        });

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("dequeued"));
        assert!(lines[0].contains("job=project.Job"));
        assert!(lines[0].contains("hostname=node-1"));
    }
}
