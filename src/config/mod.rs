//! Centralized application configuration
//!
//! This module provides a modular configuration system with support for TOML files
//! and environment variables with sensible defaults and validation.
//!
//! Configuration is resolved once at startup. The trigger endpoint never
//! discovers a missing bucket or a malformed target list at request time.

pub mod auth;
pub mod error;
pub mod network;
pub mod operational;
pub mod storage;
pub mod targets;
pub mod webhook;

use serde::{Deserialize, Serialize};

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use network::NetworkConfig;
pub use operational::OperationalConfig;
pub use storage::StorageConfig;
pub use targets::TargetsConfig;
pub use webhook::WebhookConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub operational: OperationalConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl AppConfig {
    /// Load complete application configuration from environment variables
    ///
    /// This validates all configuration values and returns an error if any are invalid.
    /// All optional values have sensible defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            network: NetworkConfig::load()?,
            storage: StorageConfig::load()?,
            targets: TargetsConfig::load()?,
            auth: AuthConfig::load()?,
            operational: OperationalConfig::load()?,
            webhook: WebhookConfig::load()?,
        })
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::InvalidValue {
                key: "config_file".to_string(),
                value: path.as_ref().display().to_string(),
                reason: format!("Failed to read file: {}", e),
            }
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::InvalidValue {
            key: "config_file".to_string(),
            value: path.as_ref().display().to_string(),
            reason: format!("Failed to parse TOML: {}", e),
        })
    }

    /// Load configuration with layered approach:
    /// 1. Start with defaults
    /// 2. Load from TOML file if given
    /// 3. Override with environment variables
    ///
    /// Environment variables always win over file values.
    pub fn load_layered(path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to existing configuration
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.network.apply_env_overrides()?;
        self.storage.apply_env_overrides()?;
        self.targets.apply_env_overrides()?;
        self.auth.apply_env_overrides()?;
        self.operational.apply_env_overrides()?;
        self.webhook.apply_env_overrides()?;
        Ok(())
    }

    /// Validate cross-section requirements
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;
        if let Some(key) = &self.auth.api_key {
            AuthConfig::validate_key(key)?;
        }
        Ok(())
    }
}
