#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests: boundary inputs, malformed entries, and partial extraction

use transfer_payload::{
    create_transfer_payload, extract_transfer_files, extract_transfer_files_each,
    parse_transfer_payload, payload_to_json, FixedClock, PayloadError, SourceFile,
};

// ============================================================================
// INPUT TEXT EDGE CASES
// ============================================================================

#[test]
fn test_empty_and_blank_text() {
    for text in ["", "   ", "\n\t"] {
        assert!(matches!(
            parse_transfer_payload(text),
            Err(PayloadError::MalformedPayload(_))
        ));
    }
}

#[test]
fn test_truncated_json() {
    let payload =
        create_transfer_payload(&[SourceFile::new("a", "abc")], &FixedClock::from_unix_millis(0))
            .unwrap();
    let text = payload_to_json(&payload).unwrap();
    let truncated = &text[..text.len() / 2];
    assert!(matches!(
        parse_transfer_payload(truncated),
        Err(PayloadError::MalformedPayload(_))
    ));
}

#[test]
fn test_kind_with_wrong_type() {
    assert!(matches!(
        parse_transfer_payload(r#"{"kind":7,"files":[]}"#),
        Err(PayloadError::UnrecognizedPayload { kind: None, .. })
    ));
}

#[test]
fn test_entry_with_wrong_field_types() {
    let text = r#"{"kind":"FILE_TRANSFER_PAYLOAD","files":[{"fileName":"x","sizeBytes":"1","checksumSha256":"00","data":""}]}"#;
    match parse_transfer_payload(text) {
        Err(PayloadError::UnrecognizedPayload { kind, .. }) => {
            assert_eq!(kind.as_deref(), Some("FILE_TRANSFER_PAYLOAD"))
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_negative_size_rejected() {
    let text = r#"{"kind":"FILE_TRANSFER_PAYLOAD","files":[{"fileName":"x","sizeBytes":-1,"checksumSha256":"00","data":""}]}"#;
    assert!(matches!(
        parse_transfer_payload(text),
        Err(PayloadError::UnrecognizedPayload { .. })
    ));
}

#[test]
fn test_unknown_extra_fields_tolerated() {
    let text = r#"{"kind":"FILE_TRANSFER_PAYLOAD","source":"other-app","files":[{"fileName":"x","sizeBytes":0,"checksumSha256":"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855","data":"","mime":"text/plain"}]}"#;
    let files = extract_transfer_files(&parse_transfer_payload(text).unwrap()).unwrap();
    assert!(files[0].hash_matches);
}

#[test]
fn test_empty_files_array() {
    let payload = parse_transfer_payload(r#"{"kind":"FILE_TRANSFER_PAYLOAD","files":[]}"#).unwrap();
    assert!(payload.is_empty());
    assert!(extract_transfer_files(&payload).unwrap().is_empty());
}

// ============================================================================
// EXTRACTION EDGE CASES
// ============================================================================

#[test]
fn test_line_wrapped_base64_accepted() {
    let text = r#"{"kind":"FILE_TRANSFER_PAYLOAD","files":[{"fileName":"h","sizeBytes":11,"checksumSha256":"b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9","data":"aGVsbG8g\r\nd29ybGQ="}]}"#;
    let files = extract_transfer_files(&parse_transfer_payload(text).unwrap()).unwrap();
    assert_eq!(files[0].bytes, b"hello world");
    assert!(files[0].is_intact());
}

#[test]
fn test_fail_fast_versus_per_file() {
    let text = r#"{"kind":"FILE_TRANSFER_PAYLOAD","files":[
        {"fileName":"ok.txt","sizeBytes":3,"checksumSha256":"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad","data":"YWJj"},
        {"fileName":"broken.bin","sizeBytes":1,"checksumSha256":"00","data":"@@@"}
    ]}"#;
    let payload = parse_transfer_payload(text).unwrap();

    let err = extract_transfer_files(&payload).unwrap_err();
    assert_eq!(err.file_name(), Some("broken.bin"));
    assert!(err.to_string().contains("broken.bin"));

    let each = extract_transfer_files_each(&payload);
    assert_eq!(each[0].as_ref().unwrap().bytes, b"abc");
    assert!(each[1].is_err());
}

#[test]
fn test_large_file_roundtrip() {
    let big: Vec<u8> = (0..2 * 1024 * 1024).map(|i| (i % 251) as u8).collect();
    let payload =
        create_transfer_payload(&[SourceFile::new("big.bin", big.clone())], &FixedClock::from_unix_millis(0))
            .unwrap();
    let text = payload_to_json(&payload).unwrap();
    let files = extract_transfer_files(&parse_transfer_payload(&text).unwrap()).unwrap();
    assert_eq!(files[0].bytes, big);
    assert!(files[0].hash_matches);
}

#[test]
fn test_duplicate_names_are_kept() {
    let files = [SourceFile::new("same", "1"), SourceFile::new("same", "2")];
    let payload = create_transfer_payload(&files, &FixedClock::from_unix_millis(0)).unwrap();
    let out = extract_transfer_files(&payload).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].bytes, b"1");
    assert_eq!(out[1].bytes, b"2");
}
