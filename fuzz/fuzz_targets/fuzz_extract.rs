#![no_main]

use libfuzzer_sys::fuzz_target;
use transfer_payload::core::extract_file;
use transfer_payload::FileEntry;

fuzz_target!(|data: &[u8]| {
    // Fuzz the Base64 decoder and checksum comparison through a raw entry
    let text = String::from_utf8_lossy(data).into_owned();
    let entry = FileEntry {
        file_name: "fuzz".to_string(),
        size_bytes: data.len() as u64,
        checksum_sha256: text.clone(),
        data: text,
    };
    let _ = extract_file(&entry);
});
