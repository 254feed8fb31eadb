//! Queue snapshot types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Job;

/// A point-in-time list of all jobs plus a creation timestamp.
///
/// A snapshot arrives wholesale on each feed message and fully replaces
/// the prior state. There is no incremental merge and no eviction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    /// When the framework produced this snapshot.
    pub created: DateTime<Utc>,
    /// All job summary rows at that moment.
    pub jobs: Vec<Job>,
}

impl QueueSnapshot {
    /// Create a new snapshot.
    pub fn new(created: DateTime<Utc>, jobs: Vec<Job>) -> Self {
        Self { created, jobs }
    }

    /// Create an empty snapshot stamped now.
    pub fn empty() -> Self {
        Self {
            created: Utc::now(),
            jobs: Vec::new(),
        }
    }

    /// Whether the snapshot contains no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Total number of jobs across all rows (sum of weights).
    pub fn total(&self) -> u64 {
        self.jobs.iter().map(|j| j.n).sum()
    }
}
