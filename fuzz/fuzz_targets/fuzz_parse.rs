#![no_main]

use libfuzzer_sys::fuzz_target;
use transfer_payload::{extract_transfer_files_each, parse_transfer_payload};

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary text must never panic; whatever parses must extract without panicking
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(payload) = parse_transfer_payload(text) {
            let _ = extract_transfer_files_each(&payload);
        }
    }
});
