use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sigilwire::{Alphabet, Scheme, decode_bytes, encode_bytes, tokenize};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion, scheme: Scheme) {
    let mut group = c.benchmark_group(format!("encode_{}", scheme));

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = sample(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode_bytes(black_box(data), black_box(scheme)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion, scheme: Scheme) {
    let mut group = c.benchmark_group(format!("decode_{}", scheme));

    for size in SIZES {
        let encoded = encode_bytes(&sample(size), scheme);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode_bytes(black_box(encoded), black_box(scheme)).unwrap());
        });
    }
    group.finish();
}

fn bench_encode_nibble(c: &mut Criterion) {
    bench_encode(c, Scheme::Nibble);
}

fn bench_decode_nibble(c: &mut Criterion) {
    bench_decode(c, Scheme::Nibble);
}

fn bench_encode_base64(c: &mut Criterion) {
    bench_encode(c, Scheme::Base64);
}

fn bench_decode_base64(c: &mut Criterion) {
    bench_decode(c, Scheme::Base64);
}

// Base64 streams exercise the two-codepoint symbol path
fn bench_tokenize_base64(c: &mut Criterion) {
    let alphabet = Alphabet::for_scheme(Scheme::Base64);
    let mut group = c.benchmark_group("tokenize_base64");

    for size in SIZES {
        let encoded = encode_bytes(&sample(size), Scheme::Base64);

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| tokenize(black_box(encoded), alphabet).count());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_nibble,
    bench_decode_nibble,
    bench_encode_base64,
    bench_decode_base64,
    bench_tokenize_base64,
);
criterion_main!(benches);
