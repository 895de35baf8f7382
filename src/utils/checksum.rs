//! SHA-256 checksums for packed files.
//!
//! Digests are rendered as 64 lowercase hex characters. They detect transport
//! corruption; they are not signatures.

use sha2::{Digest, Sha256};

/// SHA-256 of the empty input
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Length of a hex-encoded SHA-256 digest
pub const SHA256_HEX_LEN: usize = 64;

/// Compute the lowercase hex SHA-256 digest of `data`
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compare a recorded checksum against a computed one.
///
/// Case-insensitive: the PowerShell packer writes uppercase hex.
pub fn checksums_match(recorded: &str, computed: &str) -> bool {
    recorded.trim().eq_ignore_ascii_case(computed)
}

/// Whether `value` looks like a hex SHA-256 digest
pub fn is_sha256_hex(value: &str) -> bool {
    value.len() == SHA256_HEX_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}
