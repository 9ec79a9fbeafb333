//! Backup target list configuration
//!
//! The target list arrives as a JSON array (typically injected from a secret
//! manager): `[{"name": "orders", "uri": "mongodb://...", "tool": "mongodump"}]`.
//! Entries with a missing name or uri are kept and reported as skipped at run
//! time rather than rejected here, so one bad entry never blocks the rest.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::types::BackupTarget;

/// Backup target list configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Databases to dump, in sweep order
    #[serde(default)]
    pub targets: Vec<BackupTarget>,
}

impl TargetsConfig {
    /// Load the target list from the `DUMPGATE_TARGETS` environment variable
    pub fn load() -> Result<Self, ConfigError> {
        let raw = std::env::var("DUMPGATE_TARGETS").map_err(|_| ConfigError::MissingRequired {
            key: "DUMPGATE_TARGETS".to_string(),
            hint: "JSON array of {name, uri} entries".to_string(),
        })?;
        Self::parse(&raw)
    }

    /// Apply environment variable overrides to existing configuration
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = std::env::var("DUMPGATE_TARGETS") {
            *self = Self::parse(&raw)?;
        }
        Ok(())
    }

    /// Parse a JSON target list
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let targets: Vec<BackupTarget> =
            serde_json::from_str(raw).map_err(|e| ConfigError::InvalidValue {
                key: "DUMPGATE_TARGETS".to_string(),
                value: raw.to_string(),
                reason: format!("invalid JSON: {}", e),
            })?;
        Ok(Self { targets })
    }

    /// Number of entries that can actually be dumped
    pub fn runnable_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_runnable()).count()
    }
}
