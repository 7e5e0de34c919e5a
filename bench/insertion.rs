use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use imst::{Entry, FieldHasher, IncrementalMerkleSumTree, MerkleSumTree};

pub fn generate_random_entry() -> Entry {
    let identifier: String = (0..16)
        .map(|_| (b'a' + rand::random::<u8>() % 26) as char)
        .collect();
    Entry::new(identifier, rand::random::<u32>()).unwrap()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("IMST Insertion");

    // Benchmark incremental insertion, cost grows with the depth only
    for depth in [8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("Incremental Tree", depth), &depth, |b, depth| {
            b.iter(|| {
                let mut tree =
                    IncrementalMerkleSumTree::new(*depth, Arc::new(FieldHasher::new())).unwrap();
                for _ in 0..100 {
                    tree.insert(generate_random_entry()).unwrap();
                }
            })
        });
    }

    // Benchmark the one pass build of the same number of entries
    group.bench_function("Built Tree", |b| {
        b.iter(|| {
            let entries = (0..100).map(|_| generate_random_entry()).collect();
            MerkleSumTree::new(entries, Arc::new(FieldHasher::new())).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_insertion);
criterion_main!(benches);
