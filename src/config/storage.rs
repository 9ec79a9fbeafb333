//! Storage-related configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::ConfigError;

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Object storage bucket that receives the archives
    #[serde(default)]
    pub bucket: String,
    /// Key prefix under which archives are placed
    #[serde(default = "StorageConfig::default_key_prefix")]
    pub key_prefix: String,
    /// Working directory for scratch archive files
    #[serde(default = "StorageConfig::default_scratch_dir")]
    pub scratch_dir: PathBuf,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to existing configuration
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("DUMPGATE_BUCKET") {
            self.bucket = val;
        }
        if let Ok(val) = std::env::var("DUMPGATE_KEY_PREFIX") {
            self.key_prefix = val;
        }
        if let Ok(val) = std::env::var("DUMPGATE_SCRATCH_DIR") {
            self.scratch_dir = val.into();
        }
        Ok(())
    }

    /// Validate that required values are present
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "DUMPGATE_BUCKET".to_string(),
                hint: "name of the object storage bucket for archives".to_string(),
            });
        }
        Ok(())
    }

    // Default value functions
    fn default_key_prefix() -> String {
        "backups".to_string()
    }
    fn default_scratch_dir() -> PathBuf {
        "/tmp".into()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            key_prefix: Self::default_key_prefix(),
            scratch_dir: Self::default_scratch_dir(),
        }
    }
}
