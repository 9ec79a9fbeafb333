use serde::{Deserialize, Serialize};
use std::path::Path;

/// External dump tool used for a target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DumpTool {
    #[default]
    Mongodump,
    PgDump,
}

impl DumpTool {
    /// Name of the binary to spawn
    pub fn binary(&self) -> &'static str {
        match self {
            DumpTool::Mongodump => "mongodump",
            DumpTool::PgDump => "pg_dump",
        }
    }

    /// File extension of the produced archive
    pub fn archive_extension(&self) -> &'static str {
        match self {
            // mongodump writes a gzipped archive stream
            DumpTool::Mongodump => "gz",
            // pg_dump custom format compresses internally
            DumpTool::PgDump => "dump",
        }
    }

    /// Command-line arguments for dumping `uri` into `archive_path`
    pub fn args(&self, uri: &str, archive_path: &Path) -> Vec<String> {
        match self {
            DumpTool::Mongodump => vec![
                format!("--uri={}", uri),
                format!("--archive={}", archive_path.display()),
                "--gzip".to_string(),
            ],
            DumpTool::PgDump => vec![
                format!("--dbname={}", uri),
                "--format=custom".to_string(),
                format!("--file={}", archive_path.display()),
            ],
        }
    }
}

impl std::fmt::Display for DumpTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.binary())
    }
}

/// A single database to back up
///
/// Incomplete entries (missing name or uri) are preserved so the sweep can
/// report them as skipped instead of silently dropping them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupTarget {
    /// Logical name, used in object keys and reports
    #[serde(default)]
    pub name: String,
    /// Connection URI handed to the dump tool
    #[serde(default)]
    pub uri: String,
    /// Dump tool for this target
    #[serde(default)]
    pub tool: DumpTool,
}

impl BackupTarget {
    /// Whether this entry carries enough information to be dumped
    pub fn is_runnable(&self) -> bool {
        !self.name.is_empty() && !self.uri.is_empty()
    }

    /// Name for reporting, with a placeholder for nameless entries
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "<no-name>" } else { &self.name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn mongodump_args_request_a_gzipped_archive() {
        let args = DumpTool::Mongodump.args("mongodb://db0/orders", &PathBuf::from("/tmp/a.gz"));
        assert_eq!(
            args,
            vec!["--uri=mongodb://db0/orders", "--archive=/tmp/a.gz", "--gzip"]
        );
    }

    #[test]
    fn pg_dump_args_use_custom_format() {
        let args = DumpTool::PgDump.args("postgresql://db1/billing", &PathBuf::from("/tmp/b.dump"));
        assert_eq!(
            args,
            vec![
                "--dbname=postgresql://db1/billing",
                "--format=custom",
                "--file=/tmp/b.dump"
            ]
        );
    }

    #[test]
    fn nameless_targets_report_a_placeholder() {
        let target = BackupTarget {
            name: String::new(),
            uri: "mongodb://db0".to_string(),
            tool: DumpTool::default(),
        };
        assert!(!target.is_runnable());
        assert_eq!(target.display_name(), "<no-name>");
    }
}
