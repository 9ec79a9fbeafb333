//! Health service for liveness and readiness checks

use serde::Serialize;

use crate::config::TargetsConfig;

/// Readiness summary returned by the ready endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ReadySummary {
    pub status: &'static str,
    /// Total configured target entries
    pub targets: usize,
    /// Entries that can actually be dumped
    pub runnable_targets: usize,
}

/// Domain service for health check operations
pub struct HealthService {
    targets: usize,
    runnable_targets: usize,
}

impl HealthService {
    pub fn new(targets: &TargetsConfig) -> Self {
        Self {
            targets: targets.targets.len(),
            runnable_targets: targets.runnable_count(),
        }
    }

    /// Readiness: configuration is loaded, targets are known
    pub fn ready(&self) -> ReadySummary {
        ReadySummary {
            status: "ready",
            targets: self.targets,
            runnable_targets: self.runnable_targets,
        }
    }
}
