//! Incremental Merkle Sum Tree implementation
//!
//! A Merkle Sum Tree is a binary merkle tree where every node carries, next to
//! its hash, the sum of the balances of the leaves below it:
//! - a leaf commits to an entry: `hash = H(identifier, balance)`, `sum = balance`,
//! - a middle node commits to its children: `hash = H(left.hash, left.sum, right.hash, right.sum)`
//!   and `sum = left.sum + right.sum`,
//! - the root commits to the ordered list of entries and to their total.
//!
//! The crate provides:
//! - [`MerkleSumTree`], built in one pass from a list of entries,
//! - [`IncrementalMerkleSumTree`], grown one leaf at a time up to a fixed depth,
//! - membership proofs and target sum proofs, verifiable without the tree,
//! - a pluggable arithmetic [`Hasher`].

pub mod codec;
pub mod config;
mod error;
mod node;
mod proof;
pub mod source;
mod tree;
pub mod validate;

pub use config::{LeafDisclosure, PaddingPolicy, TreeConfig};
pub use error::TreeError;
pub use node::{Entry, FieldHasher, Hasher, Node, Sum, ThreadSafe};
pub use proof::{
    verify_proof, verify_proof_with_target_sum, CompressedProof, MembershipProof, ProofLeaf,
    TargetSumProof,
};
pub use tree::{
    path_indices, walk_up, IncrementalMerkleSumTree, MerkleSumTree, NodeGrid, Phase, SumTree,
    ZeroNodes,
};

#[cfg(test)]
mod tests;
