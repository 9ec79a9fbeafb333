//! Webhook notification configuration

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Webhook notification configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// URL that receives the run report after each sweep, when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl WebhookConfig {
    /// Load webhook configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides to existing configuration
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("DUMPGATE_WEBHOOK_URL") {
            if !val.starts_with("http://") && !val.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    key: "DUMPGATE_WEBHOOK_URL".to_string(),
                    value: val,
                    reason: "expected an http(s) URL".to_string(),
                });
            }
            self.url = Some(val);
        }
        Ok(())
    }
}
