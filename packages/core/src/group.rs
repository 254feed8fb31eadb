//! Grouping of job states into named dashboard buckets.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Job, QueueSnapshot};

/// Name of the fallback group for states not covered by the config.
pub const OTHER_GROUP: &str = "other";

/// Per-state aggregate counts (state label -> summed weight).
pub type StateCounts = BTreeMap<String, u64>;

/// Errors raised when building a [`GroupConfig`].
#[derive(Debug, thiserror::Error)]
pub enum GroupConfigError {
    /// The `other` group is implicit and cannot be configured directly.
    #[error("group name '{0}' is reserved")]
    ReservedName(String),
    /// A state label may belong to exactly one group.
    #[error("state '{state}' is already mapped to group '{group}'")]
    DuplicateState { state: String, group: String },
}

/// Ordered mapping of group name to the job states shown together.
///
/// Every state maps to exactly one group; states not named by the
/// config fall into the trailing [`OTHER_GROUP`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    groups: Vec<(String, Vec<String>)>,
}

impl Default for GroupConfig {
    /// The dashboard defaults: `waiting` for jobs not yet running,
    /// `running` for active jobs, `stopped` for jobs that ended badly.
    fn default() -> Self {
        Self {
            groups: vec![
                (
                    "waiting".to_string(),
                    vec![
                        "pending".to_string(),
                        "deferred".to_string(),
                        "failed".to_string(),
                    ],
                ),
                ("running".to_string(), vec!["running".to_string()]),
                (
                    "stopped".to_string(),
                    vec![
                        "error".to_string(),
                        "inactive".to_string(),
                        "killed".to_string(),
                    ],
                ),
            ],
        }
    }
}

impl GroupConfig {
    /// Create a config with no groups; everything falls into `other`.
    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a group mapping the given states.
    ///
    /// Rejects the reserved `other` name and states already claimed by
    /// an earlier group, so that every state keeps exactly one home.
    pub fn with_group(
        mut self,
        name: impl Into<String>,
        states: &[&str],
    ) -> Result<Self, GroupConfigError> {
        let name = name.into();
        if name == OTHER_GROUP {
            return Err(GroupConfigError::ReservedName(name));
        }
        let mut members: Vec<String> = Vec::with_capacity(states.len());
        for state in states {
            for (group, claimed) in &self.groups {
                if claimed.iter().any(|s| s == state) {
                    return Err(GroupConfigError::DuplicateState {
                        state: state.to_string(),
                        group: group.clone(),
                    });
                }
            }
            if members.iter().any(|s| s == state) {
                return Err(GroupConfigError::DuplicateState {
                    state: state.to_string(),
                    group: name,
                });
            }
            members.push(state.to_string());
        }
        self.groups.push((name, members));
        Ok(self)
    }

    /// The group a state label belongs to, or [`OTHER_GROUP`].
    pub fn group_for(&self, state: &str) -> &str {
        self.groups
            .iter()
            .find(|(_, states)| states.iter().any(|s| s == state))
            .map(|(name, _)| name.as_str())
            .unwrap_or(OTHER_GROUP)
    }

    /// Configured group names in display order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }
}

/// A named bucket of job summary rows shown together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Group name from the config (or `other`).
    pub name: String,
    /// Rows assigned to this group, in snapshot order.
    pub jobs: Vec<Job>,
    /// Sum of weights across the rows.
    pub total: u64,
}

impl Group {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            jobs: Vec::new(),
            total: 0,
        }
    }
}

/// The derived dashboard view: configured groups in order plus a
/// per-state counter map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedView {
    /// Configured groups in display order; `other` trails when non-empty.
    pub groups: Vec<Group>,
    /// Aggregate count per state label.
    pub counts: StateCounts,
    /// Total jobs across all states.
    pub total: u64,
    /// Creation timestamp of the source snapshot.
    pub created: Option<DateTime<Utc>>,
}

impl GroupedView {
    /// Partition a snapshot into groups and accumulate per-state counts.
    pub fn from_snapshot(config: &GroupConfig, snapshot: &QueueSnapshot) -> Self {
        let mut groups: Vec<Group> = config.group_names().map(Group::new).collect();
        let mut other = Group::new(OTHER_GROUP);
        let mut counts = StateCounts::new();
        let mut total = 0u64;

        for job in &snapshot.jobs {
            *counts.entry(job.state.clone()).or_default() += job.n;
            total += job.n;

            let name = config.group_for(&job.state);
            let target = match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group,
                None => &mut other,
            };
            target.total += job.n;
            target.jobs.push(job.clone());
        }

        if !other.jobs.is_empty() {
            groups.push(other);
        }

        Self {
            groups,
            counts,
            total,
            created: Some(snapshot.created),
        }
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Aggregate count for a state label (zero when absent).
    pub fn count(&self, state: &str) -> u64 {
        self.counts.get(state).copied().unwrap_or(0)
    }
}
