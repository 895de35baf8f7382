//! # transfer-payload
//!
//! Versioned, checksum-verified JSON payloads for moving files through the
//! clipboard (or any text channel).
//!
//! A payload packs one or more files as Base64 with a SHA-256 checksum each.
//! The parser reads the current `FILE_TRANSFER_PAYLOAD` v1.1 format plus the
//! single-file `FILE_PAYLOAD` and `LAU_PAYLOAD` formats, normalizing them to
//! the current shape. Checksum mismatches never fail extraction; they are
//! reported per file.
//!
//! ## Example
//! ```rust
//! use transfer_payload::{
//!     create_transfer_payload, extract_transfer_files, parse_transfer_payload,
//!     payload_to_json, FixedClock, SourceFile,
//! };
//!
//! # fn main() -> transfer_payload::Result<()> {
//! let clock = FixedClock::from_unix_millis(0);
//! let payload = create_transfer_payload(&[SourceFile::new("notes.txt", "hi")], &clock)?;
//! let text = payload_to_json(&payload)?;
//!
//! let received = parse_transfer_payload(&text)?;
//! let files = extract_transfer_files(&received)?;
//! assert_eq!(files[0].bytes, b"hi");
//! assert!(files[0].hash_matches);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::CodecConfig;
pub use crate::core::{
    create_transfer_payload, extract_transfer_files, extract_transfer_files_each,
    parse_transfer_payload, payload_to_json, ExtractedFile, FileEntry, PayloadCodec,
    PayloadMetadata, PayloadOrigin, SourceFile, TransferPayload,
};
pub use crate::error::{PayloadError, Result};
pub use crate::utils::checksum::sha256_hex as sha256;
pub use crate::utils::time::{Clock, FixedClock, SystemClock};
