//! Configuration error types

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value is invalid
    #[error("invalid configuration for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// A required configuration value is missing
    #[error("missing required configuration: {key} ({hint})")]
    MissingRequired { key: String, hint: String },
}
