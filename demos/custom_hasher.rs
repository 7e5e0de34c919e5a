//! Example of plugging a custom hasher into the Merkle Sum Tree
//!
//! This example demonstrates:
//! - Implementing the Hasher trait
//! - Using a closure as a hasher
//! - Verifying proofs with the hasher the tree was built with

use std::sync::Arc;

use imst::{verify_proof, Entry, Hasher, IncrementalMerkleSumTree, SumTree};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

// Custom hasher that uses SHA256 but adds a prefix to the input
struct PrefixedSha256;

impl Hasher for PrefixedSha256 {
    fn hash(&self, values: &[BigUint]) -> BigUint {
        let mut hasher = Sha256::new();
        hasher.update(b"custom_prefix:");
        for value in values {
            hasher.update(value.to_bytes_be());
            hasher.update(b",");
        }
        BigUint::from_bytes_be(&hasher.finalize())
    }
}

fn build(hasher: Arc<dyn Hasher>) -> IncrementalMerkleSumTree {
    let mut tree = IncrementalMerkleSumTree::new(4, hasher).unwrap();
    tree.insert(Entry::new("alice", 100).unwrap()).unwrap();
    tree.insert(Entry::new("bob", 200).unwrap()).unwrap();
    tree
}

fn main() {
    let prefixed = build(Arc::new(PrefixedSha256));
    println!("Root with custom hasher: {}", prefixed.root());

    // Any Fn(&[BigUint]) -> BigUint is a hasher, here a toy polynomial hash
    let modulus = BigUint::from(1_000_000_007u32);
    let polynomial = move |values: &[BigUint]| -> BigUint {
        values
            .iter()
            .fold(BigUint::from(17u32), |acc, value| (acc * 31u32 + value) % &modulus)
    };
    let toy = build(Arc::new(polynomial));
    println!("Root with closure hasher: {}", toy.root());

    // The sums agree, the hashes do not
    assert_eq!(prefixed.root().sum(), toy.root().sum());
    let proof = prefixed.merkle_proof(1).unwrap();
    println!("Verified with PrefixedSha256: {}", verify_proof(&proof, &PrefixedSha256));
    println!("Verified with the closure: {}", toy.verify_proof(&proof));
}
