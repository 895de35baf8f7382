//! # Configuration Management
//!
//! Centralized configuration and wire constants for the payload codec.
//!
//! This module provides the limits applied by [`crate::core::PayloadCodec`]
//! and the logging settings consumed by [`crate::utils::logging`].
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`
//!
//! ## Limits
//! Payloads travel through the clipboard, so the defaults are sized for that:
//! 64 MB of JSON text, 1024 files, 48 MB of raw file data.

use crate::error::{constants, PayloadError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Discriminator of the current payload format
pub const PAYLOAD_KIND: &str = "FILE_TRANSFER_PAYLOAD";

/// Version written by this crate
pub const PAYLOAD_VERSION: &str = "1.1";

/// Discriminator of the legacy single-file format (version 1.0)
pub const LEGACY_FILE_PAYLOAD_KIND: &str = "FILE_PAYLOAD";

/// Discriminator of the single-file format written by the PowerShell packer
pub const LEGACY_LAU_PAYLOAD_KIND: &str = "LAU_PAYLOAD";

/// Content type assigned to every extracted file
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Max accepted JSON text length in bytes (64 MB)
pub const MAX_PAYLOAD_BYTES: u64 = 64 * 1024 * 1024;

/// Max number of files in one payload
pub const MAX_FILE_COUNT: usize = 1024;

/// Max raw bytes packed into one payload (48 MB, ~64 MB once Base64 encoded)
pub const MAX_TOTAL_BYTES: u64 = 48 * 1024 * 1024;

/// Main codec configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Size and count limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| {
            PayloadError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_OPEN))
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| PayloadError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content).map_err(|e| {
            PayloadError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_PARSE))
        })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("TRANSFER_PAYLOAD_MAX_PAYLOAD_BYTES") {
            config.limits.max_payload_bytes = parse_env("TRANSFER_PAYLOAD_MAX_PAYLOAD_BYTES", &value)?;
        }

        if let Ok(value) = std::env::var("TRANSFER_PAYLOAD_MAX_FILE_COUNT") {
            config.limits.max_file_count = parse_env("TRANSFER_PAYLOAD_MAX_FILE_COUNT", &value)?;
        }

        if let Ok(value) = std::env::var("TRANSFER_PAYLOAD_MAX_TOTAL_BYTES") {
            config.limits.max_total_bytes = parse_env("TRANSFER_PAYLOAD_MAX_TOTAL_BYTES", &value)?;
        }

        if let Ok(value) = std::env::var("TRANSFER_PAYLOAD_LOG_LEVEL") {
            config.logging.log_level = value.parse::<Level>().map_err(|_| {
                PayloadError::ConfigError(format!("Invalid TRANSFER_PAYLOAD_LOG_LEVEL: {value}"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PayloadError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| PayloadError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.limits.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PayloadError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| PayloadError::ConfigError(format!("Invalid {name}: {value}")))
}

/// Size and count limits enforced by the codec facade
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum JSON text length accepted by parse
    pub max_payload_bytes: u64,

    /// Maximum number of files in a payload
    pub max_file_count: usize,

    /// Maximum raw bytes packed into a payload
    pub max_total_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: MAX_PAYLOAD_BYTES,
            max_file_count: MAX_FILE_COUNT,
            max_total_bytes: MAX_TOTAL_BYTES,
        }
    }
}

impl LimitsConfig {
    /// Validate limit configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_payload_bytes == 0 {
            errors.push("Max payload bytes must be greater than 0".to_string());
        } else if self.max_payload_bytes > 1024 * 1024 * 1024 {
            errors.push(format!(
                "Max payload bytes too large: {} (maximum: 1 GB)",
                self.max_payload_bytes
            ));
        }

        if self.max_file_count == 0 {
            errors.push("Max file count must be greater than 0".to_string());
        } else if self.max_file_count > 100_000 {
            errors.push(format!(
                "Max file count too large: {} (maximum: 100,000)",
                self.max_file_count
            ));
        }

        if self.max_total_bytes == 0 {
            errors.push("Max total bytes must be greater than 0".to_string());
        } else if self.max_total_bytes.saturating_mul(4) / 3 > self.max_payload_bytes {
            // Base64 inflates by 4/3
            errors.push(format!(
                "Max total bytes {} would encode past max payload bytes {}",
                self.max_total_bytes, self.max_payload_bytes
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("transfer-payload"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
