//! Benchmarks for feistelcrypt cipher operations.
//!
//! Measures key schedule construction, single-block encrypt/decrypt
//! throughput, round-count scaling, and whole-message throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use feistelcrypt::{FeistelCipher, BLOCK_SIZE, DEFAULT_ROUNDS};

/// Key used consistently across all benchmarks.
const BENCH_KEY: &[u8] = b"BenchmarkKey2024";

/// Benchmarks `FeistelCipher::new()` (round key derivation).
fn bench_key_schedule(c: &mut Criterion) {
    c.bench_function("key_schedule", |b| {
        b.iter(|| FeistelCipher::new(black_box(BENCH_KEY), DEFAULT_ROUNDS).unwrap());
    });
}

/// Benchmarks single-block `encrypt_block()` with the default 12 rounds.
fn bench_encrypt_block(c: &mut Criterion) {
    let cipher = FeistelCipher::with_key(BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("encrypt_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    group.bench_function("12_rounds", |b| {
        let block = *b"ABCDEFGH";
        b.iter(|| cipher.encrypt_block(black_box(&block)));
    });

    group.finish();
}

/// Benchmarks single-block `decrypt_block()` with the default 12 rounds.
fn bench_decrypt_block(c: &mut Criterion) {
    let cipher = FeistelCipher::with_key(BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("decrypt_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    group.bench_function("12_rounds", |b| {
        let block = cipher.encrypt_block(b"ABCDEFGH");
        b.iter(|| cipher.decrypt_block(black_box(&block)));
    });

    group.finish();
}

/// Benchmarks `encrypt_block()` across different round counts.
fn bench_round_scaling(c: &mut Criterion) {
    let round_counts: &[usize] = &[1, 12, 32, 64];

    let mut group = c.benchmark_group("encrypt_block_round_scaling");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    for &rounds in round_counts {
        let cipher = FeistelCipher::new(BENCH_KEY, rounds).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &rounds, |b, _| {
            let block = *b"ABCDEFGH";
            b.iter(|| cipher.encrypt_block(black_box(&block)));
        });
    }

    group.finish();
}

/// Benchmarks whole-message `encrypt()` / `decrypt()` at several sizes.
fn bench_message(c: &mut Criterion) {
    let cipher = FeistelCipher::with_key(BENCH_KEY).unwrap();
    let sizes: &[usize] = &[64, 4 * 1024, 64 * 1024];

    let mut group = c.benchmark_group("message");
    for &size in sizes {
        let plaintext = vec![0x5Au8; size];
        let ciphertext = cipher.encrypt(&plaintext);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), &plaintext, |b, pt| {
            b.iter(|| cipher.encrypt(black_box(pt)));
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &ciphertext, |b, ct| {
            b.iter(|| cipher.decrypt(black_box(ct)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_key_schedule,
    bench_encrypt_block,
    bench_decrypt_block,
    bench_round_scaling,
    bench_message,
);
criterion_main!(benches);
