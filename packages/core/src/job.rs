//! Job summary rows delivered on the queue feed.

use serde::{Deserialize, Serialize};

/// One row of a queue summary: a job class in a particular state,
/// weighted by the number of jobs it currently stands for.
///
/// Additional fields on the wire are tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Qualified name of the job class.
    pub name: String,
    /// State label reported by the framework (e.g. "pending", "running").
    pub state: String,
    /// Number of jobs of this class in this state.
    pub n: u64,
}

impl Job {
    /// Create a new summary row.
    pub fn new(name: impl Into<String>, state: impl Into<String>, n: u64) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            n,
        }
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] x{}", self.name, self.state, self.n)
    }
}
