use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ed25519_sign_bench(c: &mut Criterion) {
    let kp = reissue_crypto::generate_keypair();
    let id = reissue_crypto::sha256(b"transaction id");

    c.bench_function("ed25519_sign_tx_id", |b| {
        b.iter(|| reissue_crypto::sign_hash(black_box(&id), &kp.private))
    });
}

fn ed25519_verify_bench(c: &mut Criterion) {
    let kp = reissue_crypto::generate_keypair();
    let id = reissue_crypto::sha256(b"transaction id");
    let sig = reissue_crypto::sign_hash(&id, &kp.private);

    c.bench_function("ed25519_verify_tx_id", |b| {
        b.iter(|| reissue_crypto::verify_hash_signature(black_box(&id), &sig, &kp.public))
    });
}

fn sha256_1kb_bench(c: &mut Criterion) {
    let data = vec![0xCDu8; 1024];

    c.bench_function("sha256_1KB", |b| {
        b.iter(|| reissue_crypto::sha256(black_box(&data)))
    });
}

fn hash_pair_bench(c: &mut Criterion) {
    let left = reissue_crypto::sha256(b"left");
    let right = reissue_crypto::sha256(b"right");

    c.bench_function("merkle_hash_pair", |b| {
        b.iter(|| reissue_crypto::hash_pair(black_box(&left), black_box(&right)))
    });
}

criterion_group!(
    benches,
    ed25519_sign_bench,
    ed25519_verify_bench,
    sha256_1kb_bench,
    hash_pair_bench
);
criterion_main!(benches);
