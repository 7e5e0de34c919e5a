//! Basic example of using the Merkle Sum Tree
//!
//! This example demonstrates:
//! - Building a tree from a list of entries
//! - Getting the root hash and the total sum
//! - Creating and verifying merkle proofs

use std::sync::Arc;

use imst::{verify_proof, verify_proof_with_target_sum, Entry, FieldHasher, MerkleSumTree, SumTree};
use num_bigint::BigUint;

fn main() {
    let hasher = FieldHasher::new();
    let entries = vec![
        Entry::new("alice", 100).unwrap(),
        Entry::new("bob", 200).unwrap(),
        Entry::new("carol", 300).unwrap(),
    ];

    // 3 entries are padded with a zero entry into a tree of depth 2
    let tree = MerkleSumTree::new(entries, Arc::new(hasher.clone())).unwrap();
    let root = tree.root();
    println!("Depth: {}", tree.depth());
    println!("Root hash: {}", hex::encode(root.hash().to_bytes_be()));
    println!("Total sum: {}", root.sum());

    // Look up bob and prove he is in the tree
    let index = tree
        .index_of(&Entry::new("bob", 200).unwrap())
        .expect("bob is in the tree");
    let proof = tree.merkle_proof(index).unwrap();
    println!("Merkle proof length: {}", proof.depth());
    println!("Proof verification: {}", verify_proof(&proof, &hasher));

    // Prove the total does not exceed the declared liabilities
    let proof = tree
        .merkle_proof_with_target_sum(index, BigUint::from(600u32))
        .unwrap();
    println!(
        "Target sum 600 verification: {}",
        verify_proof_with_target_sum(&proof, &hasher)
    );
    let proof = tree
        .merkle_proof_with_target_sum(index, BigUint::from(599u32))
        .unwrap();
    println!(
        "Target sum 599 verification: {}",
        verify_proof_with_target_sum(&proof, &hasher)
    );

    println!("{}", serde_json::to_string_pretty(proof.proof()).unwrap());
}
