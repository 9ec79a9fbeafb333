//! Operational timeouts

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// Operational timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalConfig {
    /// Per-target dump timeout in seconds
    #[serde(default = "OperationalConfig::default_dump_timeout_secs")]
    pub dump_timeout_secs: u64,
    /// Webhook request timeout in seconds
    #[serde(default = "OperationalConfig::default_webhook_timeout_secs")]
    pub webhook_timeout_secs: u64,
}

impl OperationalConfig {
    /// Load operational configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides to existing configuration
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("DUMPGATE_DUMP_TIMEOUT_SECS") {
            self.dump_timeout_secs = Self::parse_secs("DUMPGATE_DUMP_TIMEOUT_SECS", &val)?;
        }
        if let Ok(val) = std::env::var("DUMPGATE_WEBHOOK_TIMEOUT_SECS") {
            self.webhook_timeout_secs = Self::parse_secs("DUMPGATE_WEBHOOK_TIMEOUT_SECS", &val)?;
        }
        Ok(())
    }

    fn parse_secs(key: &str, value: &str) -> Result<u64, ConfigError> {
        match value.parse() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                reason: "expected a positive number of seconds".to_string(),
            }),
        }
    }

    /// Per-target dump timeout
    pub fn dump_timeout(&self) -> Duration {
        Duration::from_secs(self.dump_timeout_secs)
    }

    /// Webhook request timeout
    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_secs(self.webhook_timeout_secs)
    }

    // Default value functions
    fn default_dump_timeout_secs() -> u64 {
        3600
    }
    fn default_webhook_timeout_secs() -> u64 {
        10
    }
}

impl Default for OperationalConfig {
    fn default() -> Self {
        Self {
            dump_timeout_secs: Self::default_dump_timeout_secs(),
            webhook_timeout_secs: Self::default_webhook_timeout_secs(),
        }
    }
}
