//! # Error Types
//!
//! Error handling for the transfer payload codec.
//!
//! This module defines every error variant that can occur while packing,
//! parsing, or extracting a payload, plus configuration loading failures.
//!
//! ## Error Categories
//! - **Input Errors**: text that is not JSON, or JSON that is not an object
//! - **Format Errors**: valid JSON that matches no known payload variant
//! - **Encoding Errors**: a file entry whose `data` is not valid Base64
//! - **Limit Errors**: payloads exceeding the configured size or file count
//! - **Configuration Errors**: unreadable, unwritable, or invalid configuration files
//!
//! Checksum mismatches are deliberately absent: they are reported per file
//! through [`crate::core::ExtractedFile::hash_matches`].
//!
//! ## Example Usage
//! ```rust
//! use transfer_payload::error::PayloadError;
//! use transfer_payload::parse_transfer_payload;
//!
//! match parse_transfer_payload("not json") {
//!     Err(PayloadError::MalformedPayload(reason)) => println!("bad input: {reason}"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Input validation errors
    pub const ERR_NOT_AN_OBJECT: &str = "Payload must be a JSON object";
    pub const ERR_MISSING_KIND: &str = "Payload has no string `kind` discriminator";

    /// Encoding errors
    pub const ERR_SERIALIZE_FAILED: &str = "Failed to serialize payload";

    /// Configuration errors
    pub const ERR_CONFIG_OPEN: &str = "Failed to open config file";
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
}

// PayloadError is the primary error type for all codec operations
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unrecognized payload (kind: {}): {reason}", .kind.as_deref().unwrap_or("<none>"))]
    UnrecognizedPayload {
        kind: Option<String>,
        reason: String,
    },

    #[error("Invalid Base64 data for file '{file_name}': {reason}")]
    InvalidEncoding { file_name: String, reason: String },

    #[error("File at position {index} has an empty name")]
    InvalidFileName { index: usize },

    #[error("Payload too large: {size} bytes (limit {limit})")]
    OversizedPayload { size: u64, limit: u64 },

    #[error("Too many files: {count} (limit {limit})")]
    TooManyFiles { count: usize, limit: usize },

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PayloadError {
    /// Name of the file this error refers to, if any
    pub fn file_name(&self) -> Option<&str> {
        match self {
            PayloadError::InvalidEncoding { file_name, .. } => Some(file_name),
            _ => None,
        }
    }
}

/// Type alias for Results using PayloadError
pub type Result<T> = std::result::Result<T, PayloadError>;
