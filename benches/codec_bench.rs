use anybase::Codec;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_base62(c: &mut Criterion) {
    let mut group = c.benchmark_group("base62");
    let codec = Codec::base62();
    // 1 KiB of patterned input, large enough to exercise carry propagation.
    let input = (0..1024).map(|i| (i % 251) as u8).collect::<Vec<_>>();

    group.bench_function("encode", |b| b.iter(|| codec.encode(&input)));

    let encoded = codec.encode(&input);
    group.bench_function("decode", |b| b.iter(|| codec.decode(&encoded).unwrap()));
}

fn bench_base58(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58");
    let codec = Codec::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz").unwrap();
    let input = (0..1024).map(|i| (i % 251) as u8).collect::<Vec<_>>();

    group.bench_function("encode", |b| b.iter(|| codec.encode(&input)));

    let encoded = codec.encode(&input);
    group.bench_function("decode", |b| b.iter(|| codec.decode(&encoded).unwrap()));
}

criterion_group!(benches, bench_base62, bench_base58);
criterion_main!(benches);
