//! Logging configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::Level;

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line text.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// Settings for the belated-flush buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BelatedConfig {
    /// Maximum number of suppressed records retained; oldest are evicted first.
    pub capacity: usize,
    /// Records below this level are suppressed and buffered.
    pub threshold: String,
    /// Records at or above this level flush the buffer.
    pub trigger: String,
}

impl Default for BelatedConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            threshold: "info".to_string(),
            trigger: "error".to_string(),
        }
    }
}

impl BelatedConfig {
    /// Parsed suppression threshold, falling back to INFO.
    pub fn threshold_level(&self) -> Level {
        self.threshold.parse().unwrap_or(Level::INFO)
    }

    /// Parsed flush trigger, falling back to ERROR.
    pub fn trigger_level(&self) -> Level {
        self.trigger.parse().unwrap_or(Level::ERROR)
    }
}

/// Logging configuration for the monitor processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive string, e.g. `"info,feed=debug"`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Extra attributes appended to every belated-buffer record,
    /// e.g. hostname or deployment identity.
    pub extra: BTreeMap<String, String>,
    /// Belated-flush buffer settings.
    pub belated: BelatedConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            extra: BTreeMap::new(),
            belated: BelatedConfig::default(),
        }
    }
}

impl LogConfig {
    /// Read configuration from `MONITOR_LOG_*` environment variables.
    ///
    /// Unset or unparseable variables leave the defaults in place.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = std::env::var("MONITOR_LOG_LEVEL") {
            config.level = level;
        }
        if let Ok(format) = std::env::var("MONITOR_LOG_FORMAT")
            && format.eq_ignore_ascii_case("json")
        {
            config.format = LogFormat::Json;
        }
        if let Ok(capacity) = std::env::var("MONITOR_LOG_BELATED_CAPACITY")
            && let Ok(capacity) = capacity.parse()
        {
            config.belated.capacity = capacity;
        }
        if let Ok(threshold) = std::env::var("MONITOR_LOG_BELATED_THRESHOLD") {
            config.belated.threshold = threshold;
        }
        if let Ok(trigger) = std::env::var("MONITOR_LOG_BELATED_TRIGGER") {
            config.belated.trigger = trigger;
        }
        config
    }

    /// Attach an extra attribute.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_strings_parse() {
        let config = BelatedConfig {
            threshold: "debug".to_string(),
            trigger: "warn".to_string(),
            ..Default::default()
        };
        assert_eq!(config.threshold_level(), Level::DEBUG);
        assert_eq!(config.trigger_level(), Level::WARN);
    }

    #[test]
    fn bad_level_strings_fall_back() {
        let config = BelatedConfig {
            threshold: "loud".to_string(),
            trigger: "".to_string(),
            ..Default::default()
        };
        assert_eq!(config.threshold_level(), Level::INFO);
        assert_eq!(config.trigger_level(), Level::ERROR);
    }

    #[test]
    fn belated_settings_read_from_env() {
        // Process-wide env mutation; no other test touches these variables.
        unsafe {
            std::env::set_var("MONITOR_LOG_BELATED_THRESHOLD", "debug");
            std::env::set_var("MONITOR_LOG_BELATED_TRIGGER", "warn");
            std::env::set_var("MONITOR_LOG_BELATED_CAPACITY", "25");
        }
        let config = LogConfig::from_env();
        unsafe {
            std::env::remove_var("MONITOR_LOG_BELATED_THRESHOLD");
            std::env::remove_var("MONITOR_LOG_BELATED_TRIGGER");
            std::env::remove_var("MONITOR_LOG_BELATED_CAPACITY");
        }

        assert_eq!(config.belated.threshold_level(), Level::DEBUG);
        assert_eq!(config.belated.trigger_level(), Level::WARN);
        assert_eq!(config.belated.capacity, 25);
    }

    #[test]
    fn extras_accumulate() {
        let config = LogConfig::default()
            .with_extra("hostname", "node-1")
            .with_extra("identity", "monitor");
        assert_eq!(config.extra.len(), 2);
        assert_eq!(config.extra.get("hostname").map(String::as_str), Some("node-1"));
    }
}
