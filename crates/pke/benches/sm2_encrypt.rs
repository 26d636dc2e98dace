//! Benchmarks for SM2 public key encryption.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gmcrypt_api::Pke;
use gmcrypt_pke::{decrypt, encrypt, Sm2Pke};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Plaintext sizes to benchmark (in bytes)
const MESSAGE_SIZES: &[usize] = &[0, 32, 1024, 16384];

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sm2_encrypt");
    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
    let (pk, _) = Sm2Pke::keypair(&mut rng).unwrap();

    for &size in MESSAGE_SIZES {
        let message = vec![0xa5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, msg| {
            b.iter(|| black_box(encrypt(msg, &pk, &mut rng).unwrap()));
        });
    }

    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sm2_decrypt");
    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
    let (pk, sk) = Sm2Pke::keypair(&mut rng).unwrap();

    for &size in MESSAGE_SIZES {
        let ciphertext = encrypt(&vec![0xa5u8; size], &pk, &mut rng).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            ciphertext.as_bytes(),
            |b, ct| {
                b.iter(|| black_box(decrypt(ct, &sk).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encrypt, bench_decrypt);
criterion_main!(benches);
