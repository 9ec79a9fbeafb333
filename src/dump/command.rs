// Subprocess-backed dump runner
//
// Spawns the target's dump tool (mongodump, pg_dump) and waits for it to
// write the archive, enforcing the per-target timeout.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use super::{DumpError, Dumper};
use crate::types::BackupTarget;

/// Lines of stderr kept for failure reasons
const STDERR_TAIL_LINES: usize = 20;

/// Dump backend that shells out to the target's CLI tool
///
/// Each dump runs as a child process writing directly to the scratch
/// archive path. The child is killed when the timeout expires.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandDumper;

impl CommandDumper {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Dumper for CommandDumper {
    async fn dump(
        &self,
        target: &BackupTarget,
        archive_path: &Path,
        timeout: Duration,
    ) -> Result<(), DumpError> {
        let tool = target.tool.binary();

        tracing::info!(
            tool,
            target = %target.name,
            archive = %archive_path.display(),
            "Starting dump"
        );

        let mut child = Command::new(tool)
            .args(target.tool.args(&target.uri, archive_path))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => DumpError::ToolNotFound {
                    tool: tool.to_string(),
                },
                _ => DumpError::Spawn {
                    tool: tool.to_string(),
                    source: e,
                },
            })?;

        // Drain stderr concurrently so the child never blocks on a full pipe.
        // Only the tail is kept for the failure reason.
        let stderr = child.stderr.take();
        let stderr_task = tokio::spawn(async move {
            let mut tail = VecDeque::with_capacity(STDERR_TAIL_LINES);
            if let Some(stderr) = stderr {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    if tail.len() == STDERR_TAIL_LINES {
                        tail.pop_front();
                    }
                    tail.push_back(line);
                }
            }
            tail
        });

        let status = match tokio::time::timeout(timeout, child.wait()).await {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                stderr_task.abort();
                return Err(DumpError::Io {
                    tool: tool.to_string(),
                    source: e,
                });
            }
            Err(_) => {
                tracing::warn!(
                    tool,
                    target = %target.name,
                    timeout_secs = timeout.as_secs(),
                    "Dump timed out, killing child"
                );
                if let Err(e) = child.kill().await {
                    tracing::warn!(tool, error = %e, "Failed to kill timed-out dump");
                }
                stderr_task.abort();
                return Err(DumpError::Timeout {
                    tool: tool.to_string(),
                    timeout_secs: timeout.as_secs(),
                });
            }
        };

        let tail = stderr_task.await.unwrap_or_default();

        if status.success() {
            tracing::debug!(tool, target = %target.name, "Dump completed");
            Ok(())
        } else {
            Err(DumpError::ToolFailed {
                tool: tool.to_string(),
                status,
                stderr: join_tail(&tail),
            })
        }
    }
}

fn join_tail(tail: &VecDeque<String>) -> String {
    tail.iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_tail_preserves_line_order() {
        let tail: VecDeque<String> = ["first", "second"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_tail(&tail), "first\nsecond");
    }

    #[test]
    fn join_tail_of_nothing_is_empty() {
        assert_eq!(join_tail(&VecDeque::new()), "");
    }
}
