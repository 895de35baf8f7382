//! Integration tests for the single-file legacy formats

#![allow(clippy::expect_used, clippy::unwrap_used)]

use serde_json::json;
use transfer_payload::core::parse::parse_transfer_payload_with_origin;
use transfer_payload::{
    extract_transfer_files, parse_transfer_payload, payload_to_json, PayloadError, PayloadOrigin,
};

const HELLO_SHA256: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
const HELLO_BASE64: &str = "aGVsbG8gd29ybGQ=";

fn legacy(kind: &str, checksum: &str) -> String {
    json!({
        "kind": kind,
        "version": "1.0",
        "metadata": {
            "fileName": "report.txt",
            "sizeBytes": 11,
            "checksumSha256": checksum,
            "createdAtUtc": "2023-11-05T08:30:00.000Z"
        },
        "data": HELLO_BASE64
    })
    .to_string()
}

#[test]
fn test_file_payload_is_upgraded() {
    let (payload, origin) =
        parse_transfer_payload_with_origin(&legacy("FILE_PAYLOAD", HELLO_SHA256)).unwrap();

    assert_eq!(origin, PayloadOrigin::LegacyFile);
    assert_eq!(payload.version, "1.1");
    assert_eq!(payload.metadata.file_count, 1);
    assert_eq!(payload.metadata.total_bytes, 11);
    assert_eq!(payload.metadata.created_at_utc, "2023-11-05T08:30:00.000Z");
    assert_eq!(payload.files.len(), 1);

    let files = extract_transfer_files(&payload).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "report.txt");
    assert_eq!(files[0].bytes, b"hello world");
    assert!(files[0].hash_matches);
}

#[test]
fn test_lau_payload_with_uppercase_checksum() {
    let text = legacy("LAU_PAYLOAD", &HELLO_SHA256.to_uppercase());
    let (payload, origin) = parse_transfer_payload_with_origin(&text).unwrap();
    assert_eq!(origin, PayloadOrigin::LegacyLau);

    let files = extract_transfer_files(&payload).unwrap();
    assert_eq!(files[0].bytes, b"hello world");
    assert!(files[0].hash_matches);
}

#[test]
fn test_lau_payload_without_version_or_timestamp() {
    let text = json!({
        "kind": "LAU_PAYLOAD",
        "metadata": { "fileName": "a.bin", "sizeBytes": 0, "checksumSha256": "" },
        "data": ""
    })
    .to_string();
    let payload = parse_transfer_payload(&text).unwrap();
    assert_eq!(payload.metadata.created_at_utc, "");
    assert_eq!(payload.files[0].size_bytes, 0);
}

#[test]
fn test_legacy_null_timestamp_accepted() {
    for kind in ["FILE_PAYLOAD", "LAU_PAYLOAD"] {
        let text = json!({
            "kind": kind,
            "metadata": {
                "fileName": "report.txt",
                "sizeBytes": 11,
                "checksumSha256": HELLO_SHA256,
                "createdAtUtc": null
            },
            "data": HELLO_BASE64
        })
        .to_string();

        let payload = parse_transfer_payload(&text).unwrap();
        assert_eq!(payload.metadata.created_at_utc, "");

        let files = extract_transfer_files(&payload).unwrap();
        assert_eq!(files[0].bytes, b"hello world");
        assert!(files[0].hash_matches);
    }
}

#[test]
fn test_legacy_wrong_checksum_is_advisory() {
    let payload = parse_transfer_payload(&legacy("FILE_PAYLOAD", &"1".repeat(64))).unwrap();
    let files = extract_transfer_files(&payload).unwrap();
    assert_eq!(files[0].bytes, b"hello world");
    assert!(!files[0].hash_matches);
}

#[test]
fn test_upgraded_payload_serializes_as_current() {
    let payload = parse_transfer_payload(&legacy("FILE_PAYLOAD", HELLO_SHA256)).unwrap();
    let text = payload_to_json(&payload).unwrap();
    assert!(text.starts_with(r#"{"kind":"FILE_TRANSFER_PAYLOAD","version":"1.1""#));

    let (again, origin) = parse_transfer_payload_with_origin(&text).unwrap();
    assert_eq!(origin, PayloadOrigin::Current);
    assert_eq!(again, payload);
}

#[test]
fn test_legacy_missing_fields_unrecognized() {
    let missing_data = json!({
        "kind": "FILE_PAYLOAD",
        "metadata": { "fileName": "a", "sizeBytes": 1, "checksumSha256": "" }
    });
    let missing_metadata = json!({ "kind": "LAU_PAYLOAD", "data": HELLO_BASE64 });
    let missing_file_name = json!({
        "kind": "FILE_PAYLOAD",
        "metadata": { "sizeBytes": 1, "checksumSha256": "" },
        "data": HELLO_BASE64
    });

    for value in [missing_data, missing_metadata, missing_file_name] {
        let err = parse_transfer_payload(&value.to_string()).unwrap_err();
        assert!(
            matches!(err, PayloadError::UnrecognizedPayload { kind: Some(_), .. }),
            "{value}: {err:?}"
        );
    }
}

#[test]
fn test_hybrid_current_kind_with_legacy_shape_rejected() {
    let text = legacy("FILE_TRANSFER_PAYLOAD", HELLO_SHA256);
    assert!(matches!(
        parse_transfer_payload(&text),
        Err(PayloadError::UnrecognizedPayload { .. })
    ));
}
