//! Payload data model.
//!
//! Field names on the wire are camelCase; serde renames them. Struct field
//! order is the serialized key order, which keeps `payload_to_json` stable.

use crate::config::{PAYLOAD_KIND, PAYLOAD_VERSION};
use serde::{Deserialize, Serialize};

/// Discriminator of the current format.
///
/// Single-variant so that only `"FILE_TRANSFER_PAYLOAD"` round-trips through
/// a [`TransferPayload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PayloadKind {
    #[default]
    #[serde(rename = "FILE_TRANSFER_PAYLOAD")]
    FileTransfer,
}

impl PayloadKind {
    /// Wire tag
    pub fn as_str(self) -> &'static str {
        PAYLOAD_KIND
    }
}

/// One packed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file_name: String,
    pub size_bytes: u64,
    pub checksum_sha256: String,
    /// Base64 of the raw bytes
    pub data: String,
}

/// Payload-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadMetadata {
    pub file_count: u64,
    pub total_bytes: u64,
    /// ISO-8601 UTC; empty when the sender recorded none
    #[serde(default)]
    pub created_at_utc: String,
}

impl PayloadMetadata {
    /// Metadata describing `files`, stamped with `created_at_utc`
    pub fn describe(files: &[FileEntry], created_at_utc: String) -> Self {
        Self {
            file_count: files.len() as u64,
            total_bytes: files.iter().map(|f| f.size_bytes).sum(),
            created_at_utc,
        }
    }
}

/// Current-format payload (version 1.1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPayload {
    pub kind: PayloadKind,
    pub version: String,
    pub metadata: PayloadMetadata,
    pub files: Vec<FileEntry>,
}

impl TransferPayload {
    /// Build a current-format payload, deriving metadata from `files`
    pub fn new(files: Vec<FileEntry>, created_at_utc: String) -> Self {
        Self {
            kind: PayloadKind::FileTransfer,
            version: PAYLOAD_VERSION.to_string(),
            metadata: PayloadMetadata::describe(&files, created_at_utc),
            files,
        }
    }

    /// Whether the payload carries no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// File names in transfer order
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.file_name.as_str())
    }

    /// Short description for display before extraction
    pub fn summary(&self) -> PayloadSummary {
        PayloadSummary {
            version: self.version.clone(),
            file_count: self.files.len(),
            total_bytes: self.files.iter().map(|f| f.size_bytes).sum(),
            created_at_utc: self.metadata.created_at_utc.clone(),
            metadata_consistent: self.metadata == PayloadMetadata::describe(
                &self.files,
                self.metadata.created_at_utc.clone(),
            ),
        }
    }
}

/// Overview of a payload, computed from its entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSummary {
    pub version: String,
    pub file_count: usize,
    pub total_bytes: u64,
    pub created_at_utc: String,
    /// Whether the recorded metadata agrees with the entries
    pub metadata_consistent: bool,
}

/// A named buffer handed to the encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl<N: Into<String>, B: Into<Vec<u8>>> From<(N, B)> for SourceFile {
    fn from((name, bytes): (N, B)) -> Self {
        Self::new(name, bytes)
    }
}

/// A file reconstructed from a payload entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    /// Recomputed checksum agrees with the recorded one
    pub hash_matches: bool,
    /// Decoded length agrees with the recorded `sizeBytes`
    pub size_matches: bool,
    pub expected_checksum: String,
    pub actual_checksum: String,
}

impl ExtractedFile {
    /// Both integrity checks passed
    pub fn is_intact(&self) -> bool {
        self.hash_matches && self.size_matches
    }
}
