//! Backup sweep orchestration
//!
//! One sweep dumps every configured target in order, uploads each archive,
//! and collects a per-target result. A failing target never aborts the
//! sweep; its error lands in the report and the loop moves on.

use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::{OperationalConfig, StorageConfig};
use crate::dump::Dumper;
use crate::notify::Notifier;
use crate::storage::ArchiveStore;
use crate::types::{BackupTarget, RunReport, TargetReport};

/// A sweep was triggered while another one is still running
#[derive(Debug, thiserror::Error)]
#[error("a backup sweep is already in progress")]
pub struct SweepInProgress;

/// Settings the sweep loop needs from configuration
#[derive(Debug, Clone)]
pub struct SweepSettings {
    /// Directory for scratch archive files
    pub scratch_dir: PathBuf,
    /// Object key prefix
    pub key_prefix: String,
    /// Per-target dump timeout
    pub dump_timeout: Duration,
}

impl SweepSettings {
    pub fn from_config(storage: &StorageConfig, operational: &OperationalConfig) -> Self {
        Self {
            scratch_dir: storage.scratch_dir.clone(),
            key_prefix: storage.key_prefix.clone(),
            dump_timeout: operational.dump_timeout(),
        }
    }
}

/// Domain service that runs backup sweeps
pub struct BackupService {
    targets: Vec<BackupTarget>,
    dumper: Arc<dyn Dumper>,
    store: Arc<dyn ArchiveStore>,
    notifier: Arc<dyn Notifier>,
    settings: SweepSettings,
    /// Single-flight guard: one sweep at a time
    run_lock: Mutex<()>,
}

impl BackupService {
    pub fn new(
        targets: Vec<BackupTarget>,
        dumper: Arc<dyn Dumper>,
        store: Arc<dyn ArchiveStore>,
        notifier: Arc<dyn Notifier>,
        settings: SweepSettings,
    ) -> Self {
        Self {
            targets,
            dumper,
            store,
            notifier,
            settings,
            run_lock: Mutex::new(()),
        }
    }

    /// Configured targets, in sweep order
    pub fn targets(&self) -> &[BackupTarget] {
        &self.targets
    }

    /// Run a sweep unless one is already in flight
    pub async fn try_run(&self) -> Result<RunReport, SweepInProgress> {
        let _guard = self.run_lock.try_lock().map_err(|_| SweepInProgress)?;
        Ok(self.run_sweep().await)
    }

    async fn run_sweep(&self) -> RunReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        // One timestamp per sweep so all of a run's archives share it
        let stamp = started_at.format("%Y%m%d%H%M%S").to_string();

        tracing::info!(
            run_id = %run_id,
            targets = self.targets.len(),
            "Backup sweep started"
        );

        let mut results = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            results.push(self.backup_target(target, &stamp, run_id).await);
        }

        let report = RunReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            results,
        };

        tracing::info!(
            run_id = %run_id,
            ok = report.succeeded(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Backup sweep finished"
        );

        // Notification failures never change the report
        if let Err(e) = self.notifier.notify(&report).await {
            tracing::error!(
                run_id = %run_id,
                notifier = self.notifier.name(),
                error = %e,
                "Failed to deliver run report"
            );
        }

        report
    }

    async fn backup_target(&self, target: &BackupTarget, stamp: &str, run_id: Uuid) -> TargetReport {
        if !target.is_runnable() {
            tracing::warn!(
                run_id = %run_id,
                target = target.display_name(),
                "Skipping target with missing name or uri"
            );
            return TargetReport::skipped(target.display_name(), "missing name or uri");
        }

        let archive_name = format!(
            "{}-{}-{}.{}",
            target.name,
            target.tool,
            stamp,
            target.tool.archive_extension()
        );
        let scratch_path = self.settings.scratch_dir.join(&archive_name);

        let outcome = self.dump_and_upload(target, &scratch_path, stamp).await;

        // Scratch cleanup runs on every path; failure to clean is never fatal
        if let Err(e) = tokio::fs::remove_file(&scratch_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    run_id = %run_id,
                    path = %scratch_path.display(),
                    error = %e,
                    "Failed to remove scratch archive"
                );
            }
        }

        match outcome {
            Ok(location) => {
                tracing::info!(run_id = %run_id, target = %target.name, location = %location, "Target backed up");
                TargetReport::ok(target.name.clone(), location)
            }
            Err(reason) => {
                tracing::error!(run_id = %run_id, target = %target.name, reason = %reason, "Target backup failed");
                TargetReport::error(target.name.clone(), reason)
            }
        }
    }

    async fn dump_and_upload(
        &self,
        target: &BackupTarget,
        scratch_path: &std::path::Path,
        stamp: &str,
    ) -> Result<String, String> {
        self.dumper
            .dump(target, scratch_path, self.settings.dump_timeout)
            .await
            .map_err(|e| format!("dump failed: {}", e))?;

        let key = format!(
            "{}/{}/{}-{}.{}",
            self.settings.key_prefix,
            target.name,
            target.tool,
            stamp,
            target.tool.archive_extension()
        );

        self.store
            .put_archive(&key, scratch_path)
            .await
            .map_err(|e| format!("upload failed: {}", e))
    }
}
