use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hash_code::HashCode;

fn criterion_benchmark(c: &mut Criterion) {
    let left = HashCode::from_bytes(blake3::hash(b"left").as_bytes()).unwrap();
    let right = HashCode::from_bytes(blake3::hash(b"right").as_bytes()).unwrap();
    let hex = left.to_hex_string();

    c.bench_function("hash-code, eq 256 bits", |b| {
        b.iter(|| black_box(&left) == black_box(&right));
    });
    c.bench_function("hash-code, to hex", |b| {
        b.iter(|| black_box(&left).to_hex_string());
    });
    c.bench_function("hash-code, from hex", |b| {
        b.iter(|| HashCode::from_hex_str(black_box(&hex)).unwrap());
    });
    c.bench_function("hash-code, from long", |b| {
        b.iter(|| HashCode::from_long(black_box(-1)).as_bytes());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
