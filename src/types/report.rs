use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a single target within a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    Ok,
    Error,
    Skipped,
}

/// Per-target result of a backup sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetReport {
    /// Target name (`<no-name>` for nameless entries)
    pub name: String,
    /// Outcome of this target
    pub status: TargetStatus,
    /// Failure or skip reason, absent on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Storage URL of the uploaded archive, present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TargetReport {
    pub fn ok(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TargetStatus::Ok,
            reason: None,
            location: Some(location.into()),
        }
    }

    pub fn error(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TargetStatus::Error,
            reason: Some(reason.into()),
            location: None,
        }
    }

    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TargetStatus::Skipped,
            reason: Some(reason.into()),
            location: None,
        }
    }
}

/// Full report of one backup sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique id of this sweep
    pub run_id: Uuid,
    /// When the sweep started
    pub started_at: DateTime<Utc>,
    /// When the sweep finished
    pub finished_at: DateTime<Utc>,
    /// Per-target results, in configured order
    pub results: Vec<TargetReport>,
}

impl RunReport {
    /// Number of successful targets
    pub fn succeeded(&self) -> usize {
        self.count(TargetStatus::Ok)
    }

    /// Number of failed targets
    pub fn failed(&self) -> usize {
        self.count(TargetStatus::Error)
    }

    /// Number of skipped targets
    pub fn skipped(&self) -> usize {
        self.count(TargetStatus::Skipped)
    }

    /// Whether every target succeeded (skips count as not-ok)
    pub fn is_all_ok(&self) -> bool {
        self.results.iter().all(|r| r.status == TargetStatus::Ok)
    }

    fn count(&self, status: TargetStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}
