//! Event types for real-time updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events emitted by the store for real-time consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    /// The feed socket opened (initial connect or reconnect).
    Connected { timestamp: DateTime<Utc> },
    /// The feed socket closed; `error` marks an unexpected drop.
    Disconnected {
        error: bool,
        timestamp: DateTime<Utc>,
    },
    /// A reconnect attempt failed.
    ReconnectFailed { timestamp: DateTime<Utc> },
    /// A queue snapshot replaced the store contents.
    SnapshotApplied {
        created: DateTime<Utc>,
        total_jobs: u64,
        timestamp: DateTime<Utc>,
    },
}

impl StoreEvent {
    /// Get the timestamp of the event.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            StoreEvent::Connected { timestamp } => *timestamp,
            StoreEvent::Disconnected { timestamp, .. } => *timestamp,
            StoreEvent::ReconnectFailed { timestamp } => *timestamp,
            StoreEvent::SnapshotApplied { timestamp, .. } => *timestamp,
        }
    }

    /// Get a short description of this event for logging.
    pub fn description(&self) -> String {
        match self {
            StoreEvent::Connected { .. } => "Feed connected".to_string(),
            StoreEvent::Disconnected { error, .. } => {
                if *error {
                    "Feed dropped unexpectedly".to_string()
                } else {
                    "Feed disconnected".to_string()
                }
            }
            StoreEvent::ReconnectFailed { .. } => "Reconnect attempt failed".to_string(),
            StoreEvent::SnapshotApplied {
                created,
                total_jobs,
                ..
            } => format!("Snapshot from {} applied ({} jobs)", created, total_jobs),
        }
    }
}
