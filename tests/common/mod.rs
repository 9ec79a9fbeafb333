//! Shared test fixtures for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use object_store::local::LocalFileSystem;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use dumpgate::domain::SweepSettings;
use dumpgate::dump::{DumpError, Dumper};
use dumpgate::storage::{ArchiveStore, ObjectArchiveStore, StoreError};
use dumpgate::types::{BackupTarget, DumpTool};

/// URL base the local test store reports in locations
pub const TEST_URL_BASE: &str = "test://bucket";

/// Dumper that writes a fixed payload instead of spawning a subprocess
pub struct FakeDumper {
    payload: Vec<u8>,
    fail_targets: HashSet<String>,
}

impl FakeDumper {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            fail_targets: HashSet::new(),
        }
    }

    /// Make dumps of the named target fail
    pub fn failing_for(mut self, name: &str) -> Self {
        self.fail_targets.insert(name.to_string());
        self
    }
}

#[async_trait]
impl Dumper for FakeDumper {
    async fn dump(
        &self,
        target: &BackupTarget,
        archive_path: &Path,
        _timeout: Duration,
    ) -> Result<(), DumpError> {
        if self.fail_targets.contains(&target.name) {
            return Err(DumpError::ToolNotFound {
                tool: target.tool.binary().to_string(),
            });
        }
        tokio::fs::write(archive_path, &self.payload)
            .await
            .map_err(|e| DumpError::Io {
                tool: target.tool.binary().to_string(),
                source: e,
            })
    }
}

/// Store whose uploads always fail
pub struct FailingStore;

#[async_trait]
impl ArchiveStore for FailingStore {
    async fn put_archive(&self, _key: &str, _local_path: &Path) -> Result<String, StoreError> {
        Err(StoreError::Io(std::io::Error::other("bucket offline")))
    }
}

/// Runnable target with the default tool
pub fn target(name: &str, uri: &str) -> BackupTarget {
    BackupTarget {
        name: name.to_string(),
        uri: uri.to_string(),
        tool: DumpTool::default(),
    }
}

/// Target missing both name and uri (reported as skipped)
pub fn incomplete_target() -> BackupTarget {
    BackupTarget {
        name: String::new(),
        uri: String::new(),
        tool: DumpTool::default(),
    }
}

/// Archive store rooted at a local directory
pub fn local_store(bucket_root: &Path) -> Arc<dyn ArchiveStore> {
    let local = LocalFileSystem::new_with_prefix(bucket_root).expect("local store root");
    Arc::new(ObjectArchiveStore::with_store(
        Arc::new(local),
        TEST_URL_BASE,
    ))
}

/// Sweep settings pointed at a scratch directory
pub fn settings(scratch_dir: &Path) -> SweepSettings {
    SweepSettings {
        scratch_dir: scratch_dir.to_path_buf(),
        key_prefix: "backups".to_string(),
        dump_timeout: Duration::from_secs(30),
    }
}
