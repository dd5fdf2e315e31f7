use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use feistel_cipher::crypto::cipher_types::CipherMode;
use hfc128::crypto::hfc128::Hfc128Cipher;
use hfc128::crypto::propagation::analyze;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_block_ops(c: &mut Criterion) {
    let cipher = Hfc128Cipher::new();
    let key = 0x2b7e_1516_28ae_d2a6_abf7_1588_09cf_4f3c_u128;
    let block = 0x3243_f6a8_885a_308d_3131_98a2_e037_0734_u128;

    c.bench_function("encrypt_block", |b| {
        b.iter(|| cipher.encrypt_block(black_box(block), black_box(key)).unwrap())
    });
    c.bench_function("decrypt_block", |b| {
        b.iter(|| cipher.decrypt_block(black_box(block), black_box(key)).unwrap())
    });
}

fn bench_modes(c: &mut Criterion) {
    let cipher = Hfc128Cipher::new();
    let mut rng = StdRng::seed_from_u64(0xBE7C);
    let key: u128 = rng.random();
    let iv: u128 = rng.random();
    let blocks: Vec<u128> = (0..64).map(|_| rng.random()).collect();

    let mut group = c.benchmark_group("modes_64_blocks");
    for mode in [CipherMode::CBC, CipherMode::CFB] {
        let ciphertext = cipher.encrypt_sequence(mode, &blocks, key, iv).unwrap();
        group.bench_function(BenchmarkId::new("encrypt", mode), |b| {
            b.iter(|| cipher.encrypt_sequence(mode, black_box(&blocks), key, iv).unwrap())
        });
        group.bench_function(BenchmarkId::new("decrypt", mode), |b| {
            b.iter(|| cipher.decrypt_sequence(mode, black_box(&ciphertext), key, iv).unwrap())
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let cipher = Hfc128Cipher::new();
    let blocks = [0x1111_u128, 0x2222_u128];

    c.bench_function("analyze_cbc", |b| {
        b.iter(|| analyze(&cipher, CipherMode::CBC, black_box(3), black_box(4), &blocks).unwrap())
    });
}

criterion_group!(benches, bench_block_ops, bench_modes, bench_analyze);
criterion_main!(benches);
