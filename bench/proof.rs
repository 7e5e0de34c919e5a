use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use imst::{verify_proof, Entry, FieldHasher, MerkleSumTree, SumTree};

fn random_tree(size: usize) -> MerkleSumTree {
    let entries = (0..size)
        .map(|i| Entry::new(format!("user{i}"), rand::random::<u32>()).unwrap())
        .collect();
    MerkleSumTree::new(entries, Arc::new(FieldHasher::new())).unwrap()
}

fn bench_proofs(c: &mut Criterion) {
    let mut group = c.benchmark_group("IMST Proofs");
    let tree = random_tree(1 << 10);
    let hasher = FieldHasher::new();

    group.bench_function("Generate", |b| {
        b.iter(|| {
            let index = rand::random::<usize>() % tree.leaf_count();
            tree.merkle_proof(index).unwrap()
        })
    });

    let proof = tree.merkle_proof(rand::random::<usize>() % tree.leaf_count()).unwrap();
    group.bench_function("Verify", |b| b.iter(|| verify_proof(&proof, &hasher)));

    group.bench_function("Compress", |b| {
        b.iter(|| proof.compress(&hasher).encode().unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_proofs);
criterion_main!(benches);
