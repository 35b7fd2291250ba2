use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reissue_transactions::{reconstruct_id, ComponentGroup, PrivacySalt};

fn sample_groups(per_group: usize) -> Vec<ComponentGroup> {
    [0u32, 1, 2, 4, 6]
        .iter()
        .map(|&index| ComponentGroup::new(index, vec![vec![index as u8; 256]; per_group]))
        .collect()
}

fn reconstruct_small_bench(c: &mut Criterion) {
    let groups = sample_groups(2);
    let salt = PrivacySalt::new([7u8; 32]).unwrap();

    c.bench_function("reconstruct_id_5x2", |b| {
        b.iter(|| reconstruct_id(black_box(&groups), &salt))
    });
}

fn reconstruct_large_bench(c: &mut Criterion) {
    let groups = sample_groups(64);
    let salt = PrivacySalt::new([7u8; 32]).unwrap();

    c.bench_function("reconstruct_id_5x64", |b| {
        b.iter(|| reconstruct_id(black_box(&groups), &salt))
    });
}

criterion_group!(benches, reconstruct_small_bench, reconstruct_large_bench);
criterion_main!(benches);
