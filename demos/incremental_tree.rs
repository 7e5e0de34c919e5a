//! Example of growing an Incremental Merkle Sum Tree
//!
//! This example demonstrates:
//! - Inserting entries one at a time into a tree of fixed depth
//! - Updating and deleting leaves
//! - Compressing a proof of a sparse tree

use std::sync::Arc;

use imst::{verify_proof, Entry, FieldHasher, IncrementalMerkleSumTree, Phase, SumTree, TreeError};

fn main() {
    let hasher = FieldHasher::new();
    let mut tree = IncrementalMerkleSumTree::new(16, Arc::new(hasher.clone())).unwrap();
    println!("Empty root: {}", tree.root());

    for (identifier, balance) in [("alice", 10), ("bob", 20), ("carol", 30)] {
        let index = tree.insert(Entry::new(identifier, balance).unwrap()).unwrap();
        println!("Inserted {identifier} at {index}, total {}", tree.root().sum());
    }

    tree.update(1, Entry::new("bob", 25).unwrap()).unwrap();
    println!("After update, total {}", tree.root().sum());
    tree.delete(0).unwrap();
    println!("After delete, total {}", tree.root().sum());

    // Most siblings of a proof in a sparse tree are zero nodes
    let proof = tree.merkle_proof(2).unwrap();
    let compressed = proof.compress(&hasher);
    println!(
        "Proof of depth {} keeps {} siblings, encoded in {} bytes",
        proof.depth(),
        compressed.stored_siblings(),
        compressed.encode().unwrap().len()
    );
    let decompressed = compressed.decompress(&hasher).unwrap();
    println!("Proof verification: {}", verify_proof(&decompressed, &hasher));

    // A tree of depth 1 holds 2 leaves
    let mut small = IncrementalMerkleSumTree::new(1, Arc::new(hasher)).unwrap();
    small.insert(Entry::new("0", 50).unwrap()).unwrap();
    small.insert(Entry::new("1", 30).unwrap()).unwrap();
    assert_eq!(small.phase(), Phase::Full);
    match small.insert(Entry::new("2", 1).unwrap()) {
        Err(TreeError::TreeFull { capacity }) => println!("Tree is full at {capacity} leaves"),
        other => println!("Unexpected result: {other:?}"),
    }
}
