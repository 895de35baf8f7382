//! Encoding side: build a payload from in-memory files and render it as JSON.

use crate::core::payload::{FileEntry, SourceFile, TransferPayload};
use crate::error::{constants, PayloadError, Result};
use crate::utils::checksum::sha256_hex;
use crate::utils::encoding::encode_base64;
use crate::utils::time::{format_timestamp, Clock};
use tracing::debug;

/// Pack one file into an entry
pub fn pack_file(name: &str, bytes: &[u8]) -> FileEntry {
    FileEntry {
        file_name: name.to_string(),
        size_bytes: bytes.len() as u64,
        checksum_sha256: sha256_hex(bytes),
        data: encode_base64(bytes),
    }
}

/// Build a current-format payload from `files`, preserving their order.
///
/// An empty list yields a payload with `fileCount = 0`.
///
/// # Errors
/// Returns `PayloadError::InvalidFileName` if any file has an empty name
pub fn create_transfer_payload<C>(files: &[SourceFile], clock: &C) -> Result<TransferPayload>
where
    C: Clock + ?Sized,
{
    let mut entries = Vec::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        if file.name.is_empty() {
            return Err(PayloadError::InvalidFileName { index });
        }
        entries.push(pack_file(&file.name, &file.bytes));
    }

    let payload = TransferPayload::new(entries, format_timestamp(clock.now_utc()));
    debug!(
        file_count = payload.metadata.file_count,
        total_bytes = payload.metadata.total_bytes,
        "Transfer payload created"
    );
    Ok(payload)
}

/// Serialize to compact JSON.
///
/// Output is deterministic for identical input.
pub fn payload_to_json(payload: &TransferPayload) -> Result<String> {
    serde_json::to_string(payload)
        .map_err(|e| PayloadError::SerializeError(format!("{}: {e}", constants::ERR_SERIALIZE_FAILED)))
}
