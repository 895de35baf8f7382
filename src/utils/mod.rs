//! # Utility Modules
//!
//! Supporting utilities for hashing, Base64, timestamps, logging, and metrics.
//!
//! ## Components
//! - **Checksum**: SHA-256 hex digests and comparison
//! - **Encoding**: Base64 conversion for file data
//! - **Time**: Injectable clock and ISO-8601 formatting
//! - **Logging**: Structured logging configuration
//! - **Metrics**: Thread-safe observability counters

pub mod checksum;
pub mod encoding;
pub mod logging;
pub mod metrics;
pub mod time;

pub use checksum::sha256_hex;
pub use time::{Clock, FixedClock, SystemClock};
