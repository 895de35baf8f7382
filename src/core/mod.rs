//! # Core Codec Components
//!
//! Payload model, encoder, multi-format parser, and verifying extractor.
//!
//! ## Components
//! - **Payload**: wire types (`TransferPayload`, `FileEntry`) and Rust-side
//!   input/output types (`SourceFile`, `ExtractedFile`)
//! - **Pack**: checksum + Base64 each file, compact JSON rendering
//! - **Parse**: tagged dispatch over the current and legacy formats
//! - **Extract**: Base64 decode with advisory integrity flags
//! - **Codec**: configurable facade with limits and metrics
//!
//! ## Wire Format
//! ```text
//! {"kind":"FILE_TRANSFER_PAYLOAD","version":"1.1",
//!  "metadata":{"fileCount":N,"totalBytes":N,"createdAtUtc":"..."},
//!  "files":[{"fileName":"...","sizeBytes":N,"checksumSha256":"<64 hex>","data":"<base64>"}]}
//! ```

pub mod codec;
pub mod extract;
pub mod pack;
pub mod parse;
pub mod payload;

pub use codec::PayloadCodec;
pub use extract::{extract_file, extract_transfer_files, extract_transfer_files_each};
pub use pack::{create_transfer_payload, pack_file, payload_to_json};
pub use parse::{parse_transfer_payload, parse_transfer_payload_with_origin, PayloadOrigin};
pub use payload::{
    ExtractedFile, FileEntry, PayloadKind, PayloadMetadata, PayloadSummary, SourceFile,
    TransferPayload,
};
