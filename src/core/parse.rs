//! Decoding side: accept JSON text in any known payload format and normalize
//! it to the current [`TransferPayload`].
//!
//! ## Accepted Formats
//! ```text
//! FILE_TRANSFER_PAYLOAD  v1.1  {kind, version, metadata, files[]}     current
//! FILE_PAYLOAD           v1.0  {kind, version, metadata{file...}, data} legacy
//! LAU_PAYLOAD                  {kind, metadata{file...}, data}          PowerShell packer
//! ```
//!
//! The `kind` tag selects exactly one schema; variants are tried in the order
//! listed and anything else is rejected as unrecognized. Entry contents are
//! not checked here: bad Base64 and checksum mismatches surface during
//! extraction.

use crate::config::{LEGACY_FILE_PAYLOAD_KIND, LEGACY_LAU_PAYLOAD_KIND, PAYLOAD_KIND, PAYLOAD_VERSION};
use crate::core::payload::{FileEntry, PayloadKind, PayloadMetadata, TransferPayload};
use crate::error::{constants, PayloadError, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Which wire format a parsed payload arrived in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadOrigin {
    /// `FILE_TRANSFER_PAYLOAD`
    Current,
    /// `FILE_PAYLOAD` (version 1.0)
    LegacyFile,
    /// `LAU_PAYLOAD`
    LegacyLau,
}

impl PayloadOrigin {
    /// Wire tag the payload carried
    pub fn kind(self) -> &'static str {
        match self {
            PayloadOrigin::Current => PAYLOAD_KIND,
            PayloadOrigin::LegacyFile => LEGACY_FILE_PAYLOAD_KIND,
            PayloadOrigin::LegacyLau => LEGACY_LAU_PAYLOAD_KIND,
        }
    }

    /// Whether the payload was normalized from a single-file format
    pub fn is_legacy(self) -> bool {
        !matches!(self, PayloadOrigin::Current)
    }
}

#[derive(Deserialize)]
#[serde(tag = "kind")]
enum IncomingPayload {
    #[serde(rename = "FILE_TRANSFER_PAYLOAD")]
    Current(CurrentPayload),
    #[serde(rename = "FILE_PAYLOAD")]
    LegacyFile(LegacyPayload),
    #[serde(rename = "LAU_PAYLOAD")]
    LegacyLau(LegacyPayload),
}

#[derive(Deserialize)]
struct CurrentPayload {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    metadata: Option<RecordedMetadata>,
    files: Vec<FileEntry>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RecordedMetadata {
    #[serde(default)]
    file_count: Option<u64>,
    #[serde(default)]
    total_bytes: Option<u64>,
    #[serde(default)]
    created_at_utc: Option<String>,
}

#[derive(Deserialize)]
struct LegacyPayload {
    #[serde(default)]
    version: Option<String>,
    metadata: LegacyMetadata,
    data: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyMetadata {
    file_name: String,
    size_bytes: u64,
    checksum_sha256: String,
    #[serde(default)]
    created_at_utc: Option<String>,
}

impl CurrentPayload {
    fn normalize(self) -> TransferPayload {
        let recorded = self.metadata.unwrap_or_default();
        let derived =
            PayloadMetadata::describe(&self.files, recorded.created_at_utc.unwrap_or_default());

        TransferPayload {
            kind: PayloadKind::FileTransfer,
            version: self.version.unwrap_or_else(|| PAYLOAD_VERSION.to_string()),
            metadata: PayloadMetadata {
                file_count: recorded.file_count.unwrap_or(derived.file_count),
                total_bytes: recorded.total_bytes.unwrap_or(derived.total_bytes),
                created_at_utc: derived.created_at_utc,
            },
            files: self.files,
        }
    }
}

impl LegacyPayload {
    fn normalize(self, origin: PayloadOrigin) -> TransferPayload {
        let LegacyMetadata {
            file_name,
            size_bytes,
            checksum_sha256,
            created_at_utc,
        } = self.metadata;

        warn!(
            kind = origin.kind(),
            legacy_version = self.version.as_deref().unwrap_or("unknown"),
            file_name = %file_name,
            "Upgrading legacy single-file payload"
        );

        TransferPayload::new(
            vec![FileEntry {
                file_name,
                size_bytes,
                checksum_sha256,
                data: self.data,
            }],
            created_at_utc.unwrap_or_default(),
        )
    }
}

/// Parse payload text in any supported format.
///
/// # Errors
/// - `PayloadError::MalformedPayload` if the text is not JSON or not a JSON object
/// - `PayloadError::UnrecognizedPayload` if no known format matches
pub fn parse_transfer_payload(text: &str) -> Result<TransferPayload> {
    parse_transfer_payload_with_origin(text).map(|(payload, _)| payload)
}

/// Like [`parse_transfer_payload`], also reporting which format was read
pub fn parse_transfer_payload_with_origin(text: &str) -> Result<(TransferPayload, PayloadOrigin)> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| PayloadError::MalformedPayload(e.to_string()))?;

    let kind = match &value {
        Value::Object(map) => map.get("kind").and_then(Value::as_str).map(str::to_owned),
        _ => {
            return Err(PayloadError::MalformedPayload(
                constants::ERR_NOT_AN_OBJECT.to_string(),
            ))
        }
    };

    if kind.is_none() {
        return Err(PayloadError::UnrecognizedPayload {
            kind: None,
            reason: constants::ERR_MISSING_KIND.to_string(),
        });
    }

    let incoming = IncomingPayload::deserialize(value).map_err(|e| {
        PayloadError::UnrecognizedPayload {
            kind: kind.clone(),
            reason: e.to_string(),
        }
    })?;

    let parsed = match incoming {
        IncomingPayload::Current(current) => (current.normalize(), PayloadOrigin::Current),
        IncomingPayload::LegacyFile(legacy) => (
            legacy.normalize(PayloadOrigin::LegacyFile),
            PayloadOrigin::LegacyFile,
        ),
        IncomingPayload::LegacyLau(legacy) => (
            legacy.normalize(PayloadOrigin::LegacyLau),
            PayloadOrigin::LegacyLau,
        ),
    };

    debug!(
        kind = parsed.1.kind(),
        file_count = parsed.0.files.len(),
        "Transfer payload parsed"
    );
    Ok(parsed)
}
