//! Network-related configuration

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Network-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "NetworkConfig::default_bind_addr")]
    pub bind_addr: String,
    /// Port the HTTP listener binds to
    #[serde(default = "NetworkConfig::default_port")]
    pub port: u16,
}

impl NetworkConfig {
    /// Load network configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides to existing configuration
    ///
    /// `DUMPGATE_PORT` wins over the platform-injected `PORT`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("DUMPGATE_BIND_ADDR") {
            self.bind_addr = val;
        }
        if let Ok(val) = std::env::var("PORT") {
            self.port = Self::parse_port("PORT", &val)?;
        }
        if let Ok(val) = std::env::var("DUMPGATE_PORT") {
            self.port = Self::parse_port("DUMPGATE_PORT", &val)?;
        }
        Ok(())
    }

    fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
        value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected a port number (1-65535)".to_string(),
        })
    }

    // Default value functions
    fn default_bind_addr() -> String {
        "0.0.0.0".to_string()
    }
    fn default_port() -> u16 {
        8080
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind_addr: Self::default_bind_addr(),
            port: Self::default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_platform_conventions() {
        let config = NetworkConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = NetworkConfig::parse_port("DUMPGATE_PORT", "eighty").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
