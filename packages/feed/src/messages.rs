//! Feed wire messages and parser.
//!
//! The framework pushes JSON messages over WebSocket with the shape
//! `{"name": "<kind>", ...}`. This module deserializes them into the
//! typed [`FeedMessage`] enum and builds the outbound subscription
//! message.

use chrono::{DateTime, Utc};
use monitor_core::{Job, QueueSnapshot};
use serde::{Deserialize, Serialize};

/// Channel identifier for queue summaries.
pub const INTEREST_QUEUE: &str = "queue";

/// All known inbound feed messages.
///
/// Deserialized via the internally-tagged `"name"` field. Unknown
/// names are a parse error and are skipped by the processor.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum FeedMessage {
    /// Full queue summary; replaces the dashboard state wholesale.
    Summary {
        created: DateTime<Utc>,
        data: Vec<Job>,
    },
}

impl FeedMessage {
    /// Convert into the snapshot form used by the store.
    pub fn into_snapshot(self) -> QueueSnapshot {
        match self {
            FeedMessage::Summary { created, data } => QueueSnapshot::new(created, data),
        }
    }
}

/// Outbound subscription message: `{"type": "interest", "data": [..]}`.
///
/// Sent once per (re)connection, before the server starts pushing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Vec<String>,
}

impl InterestMessage {
    /// Interest in arbitrary channels.
    pub fn new(channels: &[&str]) -> Self {
        Self {
            kind: "interest".to_string(),
            data: channels.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Interest in the queue summary channel.
    pub fn queue() -> Self {
        Self::new(&[INTEREST_QUEUE])
    }
}

/// Parse a raw text frame into a typed message.
pub fn parse_message(text: &str) -> Result<FeedMessage, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_summary_message() {
        let text = r#"{
            "name": "summary",
            "created": "2024-05-01T12:00:00Z",
            "data": [
                {"name": "project.ImportJob", "state": "pending", "n": 3},
                {"name": "project.ExportJob", "state": "running", "n": 1}
            ]
        }"#;

        let msg = parse_message(text).expect("valid summary");
        assert_matches!(&msg, FeedMessage::Summary { data, .. } if data.len() == 2);

        let snapshot = msg.into_snapshot();
        assert_eq!(snapshot.total(), 4);
        assert_eq!(snapshot.jobs[0].state, "pending");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let text = r#"{
            "name": "summary",
            "created": "2024-05-01T12:00:00Z",
            "channel": "queue",
            "data": [
                {"name": "a.Job", "state": "killed", "n": 2, "flag": true}
            ]
        }"#;

        let snapshot = parse_message(text).expect("valid summary").into_snapshot();
        assert_eq!(snapshot.jobs.len(), 1);
        assert_eq!(snapshot.jobs[0].n, 2);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let text = r#"{"name": "chat", "created": "2024-05-01T12:00:00Z", "data": []}"#;
        assert!(parse_message(text).is_err());
    }

    #[test]
    fn interest_message_shape() {
        let json = serde_json::to_value(InterestMessage::queue()).expect("serializable");
        assert_eq!(json["type"], "interest");
        assert_eq!(json["data"][0], "queue");
    }
}
