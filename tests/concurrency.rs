use std::sync::Arc;
use transfer_payload::utils::metrics::Metrics;
use transfer_payload::{FixedClock, PayloadCodec, SourceFile};

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_pack_unpack() {
    use tokio::task::JoinSet;

    let iterations = 200usize;
    let payload_sizes = [0usize, 64, 512, 4096, 65536];
    let metrics = Arc::new(Metrics::new());
    let codec = Arc::new(
        PayloadCodec::new()
            .with_clock(FixedClock::from_unix_millis(0))
            .with_metrics(metrics.clone()),
    );

    let mut tasks = JoinSet::new();
    for &size in &payload_sizes {
        let codec = codec.clone();
        tasks.spawn_blocking(move || {
            for i in 0..iterations {
                let bytes = vec![((i + size) & 0xFF) as u8; size];
                let name = format!("file-{size}-{i}.bin");
                let text = codec
                    .pack(&[SourceFile::new(name.clone(), bytes.clone())])
                    .unwrap();
                let files = codec.unpack(&text).unwrap();
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].file_name, name);
                assert_eq!(files[0].bytes, bytes);
                assert!(files[0].hash_matches);
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }

    let snap = metrics.snapshot();
    let total = (iterations * payload_sizes.len()) as u64;
    assert_eq!(snap.payloads_created, total);
    assert_eq!(snap.payloads_parsed, total);
    assert_eq!(snap.files_extracted, total);
    assert_eq!(snap.checksum_mismatches, 0);
}
