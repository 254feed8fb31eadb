//! Logging for the queue monitor processes.
//!
//! Built on the `tracing` ecosystem. [`init`] installs an
//! `EnvFilter`-driven fmt subscriber plus a [`BelatedLayer`] that keeps
//! the most recent suppressed records in memory and flushes them when a
//! high-severity record arrives, so the context leading up to a failure
//! is not lost.
//!
//! Configuration comes from [`LogConfig`], either built in code or read
//! from `MONITOR_LOG_*` environment variables.

mod belated;
mod config;

pub use belated::{BelatedLayer, LogSink, MemorySink, StderrSink};
pub use config::{BelatedConfig, LogConfig, LogFormat};

use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from the given config.
///
/// Call once at application startup. Subsequent calls are no-ops.
pub fn init(config: &LogConfig) {
    init_with_sink(config, Arc::new(StderrSink));
}

/// Initialize with a custom sink for belated records.
pub fn init_with_sink(config: &LogConfig, sink: Arc<dyn LogSink>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let belated = BelatedLayer::new(&config.belated, &config.extra, sink);
    let registry = tracing_subscriber::registry().with(belated);

    // set_global_default is a no-op if already set
    match config.format {
        LogFormat::Text => {
            let _ = registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_filter(filter),
                )
                .try_init();
        }
        LogFormat::Json => {
            let _ = registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_filter(filter),
                )
                .try_init();
        }
    }
}
