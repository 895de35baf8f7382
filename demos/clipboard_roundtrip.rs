//! Example: Moving Files Through a Text Channel
//!
//! Packs two files into a payload, prints the JSON that would go on the
//! clipboard, then parses it back, including a legacy single-file payload.
//!
//! Run with: `cargo run --example clipboard_roundtrip`

#![allow(clippy::uninlined_format_args)]

use transfer_payload::utils::logging::init_logging;
use transfer_payload::utils::metrics::{global_metrics, init_metrics};
use transfer_payload::{CodecConfig, PayloadCodec, SourceFile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CodecConfig::from_env()?;
    init_logging(&config.logging);
    init_metrics();
    let codec = PayloadCodec::with_config(config)?;

    println!("=== Clipboard Payload Demo ===\n");

    // 1. Sender side
    let files = vec![
        SourceFile::new("todo.md", "- [ ] ship the payload codec\n"),
        SourceFile::new("logo.bin", vec![0xDE, 0xAD, 0xBE, 0xEF]),
    ];
    let text = codec.pack(&files)?;
    println!("1. PACKED ({} bytes of JSON)", text.len());
    println!("   {}\n", text);

    // 2. Receiver side
    let payload = codec.parse(&text)?;
    let summary = payload.summary();
    println!(
        "2. RECEIVED v{} with {} file(s), {} bytes, created {}",
        summary.version, summary.file_count, summary.total_bytes, summary.created_at_utc
    );
    for file in codec.extract(&payload)? {
        println!(
            "   - {} ({} bytes, {}): {}",
            file.file_name,
            file.bytes.len(),
            file.content_type,
            if file.hash_matches {
                "✓ checksum ok"
            } else {
                "✗ checksum mismatch"
            }
        );
    }
    println!();

    // 3. Legacy input from the PowerShell packer
    let legacy = r#"{"kind":"LAU_PAYLOAD","metadata":{"fileName":"report.txt","sizeBytes":11,"checksumSha256":"B94D27B9934D3E08A52E52D7DA7DABFAC484EFE37A5380EE9088F7ACE2EFCDE9","createdAtUtc":"2023-11-05T08:30:00Z"},"data":"aGVsbG8gd29ybGQ="}"#;
    let files = codec.unpack(legacy)?;
    println!(
        "3. LEGACY {} -> {:?} (checksum ok: {})",
        files[0].file_name,
        String::from_utf8_lossy(&files[0].bytes),
        files[0].hash_matches
    );

    global_metrics().log_metrics();
    Ok(())
}
