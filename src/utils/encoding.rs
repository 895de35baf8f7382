//! Base64 conversion for file data.
//!
//! Encoding uses the standard padded alphabet. Decoding skips ASCII
//! whitespace so line-wrapped output from other tools is accepted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode raw bytes as standard padded Base64
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard Base64, ignoring embedded ASCII whitespace
pub fn decode_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        STANDARD.decode(compact)
    } else {
        STANDARD.decode(text)
    }
}
