use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use warden::core::codec::{self, otp};

/// Generate a payload of given size.
fn generate_payload(size: usize) -> Vec<u8> {
    vec![b'x'; size]
}

/// Benchmark seal/open roundtrip with varying payload sizes.
fn bench_seal_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal_open");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let sizes = [32, 256, 1024, 4096];

    for size in sizes {
        let payload = generate_payload(size);

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("roundtrip", format!("{}B", size)),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let sealed = codec::encrypt(black_box("Facebook"), black_box(payload)).unwrap();
                    let opened = codec::decrypt(black_box("Facebook"), black_box(&sealed)).unwrap();
                    black_box(opened);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark sealing only.
fn bench_seal(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let sizes = [32, 256, 1024, 4096];

    for size in sizes {
        let payload = generate_payload(size);

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("aes_gcm", format!("{}B", size)),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let sealed = codec::encrypt(black_box("Facebook"), black_box(payload)).unwrap();
                    black_box(sealed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark one-time code derivation.
fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    group.sample_size(100);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let seed = b"ORUGKIDQOJUXMYLUMUQGWZLZ";

    group.bench_function("hotp_sha1", |b| {
        b.iter(|| {
            let code = otp::derive(black_box(seed), 0, black_box(45), 30, 6).unwrap();
            black_box(code);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_seal_open, bench_seal, bench_derive);
criterion_main!(benches);
