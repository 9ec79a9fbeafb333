//! API key authentication configuration
//!
//! This provides basic security through a shared API key.
//! When no key is configured, all routes are open (the expected mode when an
//! authenticating proxy or scheduler identity sits in front of the service).

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Minimum accepted API key length
const MIN_API_KEY_LEN: usize = 32;

/// API key authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared API key required in the `X-API-Key` header, when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl AuthConfig {
    /// Load auth configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides to existing configuration
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("DUMPGATE_API_KEY") {
            Self::validate_key(&val)?;
            self.api_key = Some(val);
        }
        Ok(())
    }

    /// Validate a candidate API key
    pub fn validate_key(key: &str) -> Result<(), ConfigError> {
        if key.len() < MIN_API_KEY_LEN {
            return Err(ConfigError::InvalidValue {
                key: "DUMPGATE_API_KEY".to_string(),
                value: "<redacted>".to_string(),
                reason: format!("API key must be at least {} characters", MIN_API_KEY_LEN),
            });
        }
        Ok(())
    }

    /// Whether requests must present an API key
    pub fn requires_key(&self) -> bool {
        self.api_key.is_some()
    }
}
