//! Extraction: decode each entry back into bytes and verify it.
//!
//! Integrity checks are advisory. A checksum or size mismatch still returns
//! the decoded bytes, flagged, so the receiver can warn and decide.

use crate::config::DEFAULT_CONTENT_TYPE;
use crate::core::payload::{ExtractedFile, FileEntry, TransferPayload};
use crate::error::{PayloadError, Result};
use crate::utils::checksum::{checksums_match, is_sha256_hex, sha256_hex};
use crate::utils::encoding::decode_base64;
use tracing::{debug, warn};

/// Decode and verify a single entry.
///
/// # Errors
/// Returns `PayloadError::InvalidEncoding` naming the file if `data` is not Base64
pub fn extract_file(entry: &FileEntry) -> Result<ExtractedFile> {
    let bytes = decode_base64(&entry.data).map_err(|e| PayloadError::InvalidEncoding {
        file_name: entry.file_name.clone(),
        reason: e.to_string(),
    })?;

    let actual_checksum = sha256_hex(&bytes);
    let hash_matches = checksums_match(&entry.checksum_sha256, &actual_checksum);
    let size_matches = bytes.len() as u64 == entry.size_bytes;

    if !hash_matches {
        warn!(
            file_name = %entry.file_name,
            expected = %entry.checksum_sha256,
            expected_is_digest = is_sha256_hex(entry.checksum_sha256.trim()),
            actual = %actual_checksum,
            "Checksum mismatch"
        );
    }
    if !size_matches {
        warn!(
            file_name = %entry.file_name,
            expected = entry.size_bytes,
            actual = bytes.len(),
            "Size mismatch"
        );
    }

    Ok(ExtractedFile {
        file_name: entry.file_name.clone(),
        bytes,
        content_type: DEFAULT_CONTENT_TYPE,
        hash_matches,
        size_matches,
        expected_checksum: entry.checksum_sha256.clone(),
        actual_checksum,
    })
}

/// Extract every file in order, stopping at the first undecodable entry.
///
/// No partial results are returned on failure; use
/// [`extract_transfer_files_each`] to keep the good entries.
///
/// # Errors
/// Returns `PayloadError::InvalidEncoding` for the first entry with bad Base64
pub fn extract_transfer_files(payload: &TransferPayload) -> Result<Vec<ExtractedFile>> {
    let files = payload
        .files
        .iter()
        .map(extract_file)
        .collect::<Result<Vec<_>>>()?;

    debug!(file_count = files.len(), "Transfer files extracted");
    Ok(files)
}

/// Extract every file in order, one result per entry
pub fn extract_transfer_files_each(payload: &TransferPayload) -> Vec<Result<ExtractedFile>> {
    payload.files.iter().map(extract_file).collect()
}
