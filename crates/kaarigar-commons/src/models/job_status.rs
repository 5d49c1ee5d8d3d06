//! Job lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a job posting.
///
/// A job starts `Open` and ends in one of the terminal states. The only legal
/// transitions are:
///
/// - `Open → Assigned` (a bid was accepted)
/// - `Assigned → Completed` (owner marked the work done)
/// - `Open → Cancelled` (owner withdrew the posting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Assigned,
    Completed,
    Cancelled,
}

impl JobStatus {
    /// True once the job can never change state again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Cancelled)
    }

    /// Whether the lifecycle permits moving from `self` to `target`.
    pub fn can_transition_to(&self, target: JobStatus) -> bool {
        matches!(
            (self, target),
            (JobStatus::Open, JobStatus::Assigned)
                | (JobStatus::Assigned, JobStatus::Completed)
                | (JobStatus::Open, JobStatus::Cancelled)
        )
    }

    /// Whether a job in this state must carry an assigned provider.
    ///
    /// Holds the core invariant: `assigned_provider_id` is non-null exactly
    /// when the status is `Assigned` or `Completed`.
    pub fn requires_assigned_provider(&self) -> bool {
        matches!(self, JobStatus::Assigned | JobStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Assigned => "assigned",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(JobStatus::Open),
            "assigned" => Ok(JobStatus::Assigned),
            "completed" => Ok(JobStatus::Completed),
            "cancelled" => Ok(JobStatus::Cancelled),
            other => Err(format!("Unknown job status: '{}'", other)),
        }
    }
}
