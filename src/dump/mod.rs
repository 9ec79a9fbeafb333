// Dump Backend Trait
//
// Defines the interface for producing a database archive on local disk.
// This allows the subprocess-backed implementation to be swapped for a
// fake in tests without changing the sweep loop.

mod command;

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use crate::types::BackupTarget;

pub use command::CommandDumper;

/// Errors from running an external dump tool
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("dump tool not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("{tool} timed out after {timeout_secs}s")]
    Timeout { tool: String, timeout_secs: u64 },

    #[error("i/o error while running {tool}: {source}")]
    Io {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for dump backend implementations
///
/// Implementations write the archive for `target` to `archive_path` or fail.
/// The sweep loop owns scratch file lifecycle and result reporting.
#[async_trait]
pub trait Dumper: Send + Sync {
    /// Dump a target into the given archive path within the timeout
    async fn dump(
        &self,
        target: &BackupTarget,
        archive_path: &Path,
        timeout: Duration,
    ) -> Result<(), DumpError>;
}
