use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use transfer_payload::sha256;
use transfer_payload::utils::encoding::{decode_base64, encode_base64};

fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum");
    let data = vec![0x3Cu8; 1024 * 1024];
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("sha256_1mb", |b| b.iter(|| sha256(&data)));

    group.bench_function("base64_encode_1mb", |b| b.iter(|| encode_base64(&data)));

    let encoded = encode_base64(&data);
    group.bench_function("base64_decode_1mb", |b| {
        b.iter(|| decode_base64(&encoded).unwrap_or_default())
    });

    group.finish();
}

criterion_group!(benches, bench_checksum);
criterion_main!(benches);
